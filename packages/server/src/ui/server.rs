//! Server execution logic.

use std::{
    future::{Future, IntoFuture},
    sync::Arc,
};

use axum::{Router, routing::get};
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;

use super::{
    error::ServerError,
    handler::{
        create_room, get_chats, get_room_detail, get_rooms, health_check, post_chat,
        websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket エンドポイント
        .route("/ws", get(websocket_handler))
        // HTTP エンドポイント
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms).post(create_room))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .route("/api/rooms/{room_id}/chats", get(get_chats).post(post_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Chat hub server
///
/// # Example
///
/// ```ignore
/// let (hub, hub_task) = Hub::spawn(HubConfig::default());
/// let state = AppState::new(hub, rooms, chats, Arc::new(SystemClock));
/// Server::new(state)
///     .with_hub_task(hub_task)
///     .run("127.0.0.1".to_string(), 8080)
///     .await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    /// 監視する Hub のタスク（サーバー稼働中に終了したらエラーで停止する）
    hub_task: Option<JoinHandle<()>>,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            hub_task: None,
        }
    }

    /// Stop serving with [`ServerError::HubStopped`] if this task finishes
    /// before shutdown.
    ///
    /// `AppState` keeps a `HubHandle` alive while serving, so the hub can only
    /// finish early by panicking.
    pub fn with_hub_task(mut self, hub_task: JoinHandle<()>) -> Self {
        self.hub_task = Some(hub_task);
        self
    }

    /// Run the server until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat hub server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let serve = axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .into_future();

        let Some(mut hub_task) = self.hub_task else {
            return serve.await.map_err(ServerError::from);
        };

        tokio::select! {
            result = serve => result.map_err(ServerError::from),
            joined = &mut hub_task => {
                match joined {
                    Ok(()) => tracing::error!("Hub stopped while the server was running"),
                    Err(e) => tracing::error!("Hub task failed: {}", e),
                }
                Err(ServerError::HubStopped)
            }
        }
    }
}
