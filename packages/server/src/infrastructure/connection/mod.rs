//! Connection lifecycle adapter
//!
//! アップグレード済みの WebSocket を Hub に引き渡し、接続ごとの読み込みタスクを起動します。
//!
//! - 書き込み側（`WebSocketConnection`）は Hub が所有する
//! - 読み込み側（`reader`）は切断を検知して登録解除を要求する

pub mod reader;
pub mod websocket;

use axum::extract::ws::WebSocket;
use futures_util::StreamExt;

use crate::infrastructure::hub::{ConnectionId, HubHandle};

pub use reader::{ReaderExit, spawn_reader};
pub use websocket::{CloseSignal, WebSocketConnection};

/// Register an upgraded socket with the hub and start its reader task.
///
/// Returns `None` when the hub is no longer running; the socket has been
/// closed in that case.
pub async fn accept(socket: WebSocket, hub: HubHandle) -> Option<ConnectionId> {
    let id = ConnectionId::new();
    let (sink, stream) = socket.split();
    let (connection, close_signal) = WebSocketConnection::new(sink);

    if let Err(e) = hub.register(id, Box::new(connection)).await {
        tracing::warn!(connection_id = %id, "Rejecting WebSocket connection: {}", e);
        return None;
    }

    spawn_reader(id, stream, close_signal, hub);
    Some(id)
}
