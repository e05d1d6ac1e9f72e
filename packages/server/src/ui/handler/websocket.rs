//! WebSocket upgrade handler.

use std::sync::Arc;

use axum::{
    extract::{State, WebSocketUpgrade, ws::rejection::WebSocketUpgradeRejection},
    response::{IntoResponse, Response},
};

use crate::{infrastructure::connection, ui::state::AppState};

/// `GET /ws`
///
/// サブプロトコルのネゴシエーション、認証、Origin の制限は行わない。
/// アップグレードに失敗した場合は呼び出し元にエラーを返し、Hub には何も登録しない。
pub async fn websocket_handler(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            tracing::warn!("WebSocket upgrade rejected: {}", rejection);
            return rejection.into_response();
        }
    };

    let hub = state.hub.clone();
    ws.on_failed_upgrade(|e| tracing::warn!("WebSocket upgrade failed: {}", e))
        .on_upgrade(move |socket| async move {
            if let Some(id) = connection::accept(socket, hub).await {
                tracing::debug!(connection_id = %id, "WebSocket connection accepted");
            }
        })
}
