//! Shared helpers for the server integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::StreamExt;
use tokio::{net::TcpListener, net::TcpStream, sync::oneshot};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use tsudoi_server::{
    domain::{ChatRepository, RoomRepository},
    infrastructure::{
        dto::http::HealthDto,
        hub::{Hub, HubConfig},
        repository::{InMemoryChatRepository, InMemoryRoomRepository, inmemory::sample},
    },
    ui::{AppState, Server},
};
use tsudoi_shared::time::{Clock, SystemClock};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How long a test waits for something to arrive before failing.
pub const WAIT: Duration = Duration::from_secs(5);

/// In-process server bound to an ephemeral port.
///
/// The server shuts down when this value is dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub http: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// Start a server with the sample rooms and chats
    pub async fn start() -> Self {
        Self::start_with(HubConfig::default(), true).await
    }

    /// Start a server with empty stores
    pub async fn start_empty() -> Self {
        Self::start_with(HubConfig::default(), false).await
    }

    pub async fn start_with(config: HubConfig, with_sample_data: bool) -> Self {
        let (hub, _hub_task) = Hub::spawn(config);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let rooms: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
        let chats: Arc<dyn ChatRepository> = Arc::new(InMemoryChatRepository::new());
        if with_sample_data {
            sample::seed_sample_data(rooms.as_ref(), chats.as_ref(), clock.as_ref())
                .await
                .expect("Failed to add sample data");
        }
        let state = AppState::new(hub, rooms, chats, clock);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = Server::new(state).serve(listener, shutdown).await {
                eprintln!("test server error: {}", e);
            }
        });

        Self {
            addr,
            http: reqwest::Client::new(),
            _shutdown: shutdown_tx,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Open a WebSocket connection and wait until the hub has registered it
    pub async fn connect(&self) -> WsClient {
        let before = self.connections().await;
        let (ws, _) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect WebSocket");
        self.wait_for_connections(before + 1).await;
        ws
    }

    /// Current number of connections reported by `/api/health`
    pub async fn connections(&self) -> usize {
        let health: HealthDto = self
            .http
            .get(self.url("/api/health"))
            .send()
            .await
            .expect("Failed to call health check")
            .json()
            .await
            .expect("Failed to parse health check");
        health.connections.expect("Hub is not running")
    }

    /// Poll `/api/health` until the hub reports `expected` connections
    pub async fn wait_for_connections(&self, expected: usize) {
        let deadline = tokio::time::Instant::now() + WAIT;
        loop {
            let actual = self.connections().await;
            if actual == expected {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {} connections, hub reports {}",
                expected,
                actual
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

/// Wait for the next text frame
pub async fn next_text(ws: &mut WsClient) -> String {
    loop {
        let message = tokio::time::timeout(WAIT, ws.next())
            .await
            .expect("Timed out waiting for a notification")
            .expect("WebSocket stream ended")
            .expect("WebSocket read failed");
        match message {
            Message::Text(text) => return text.as_str().to_string(),
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("unexpected frame: {:?}", other),
        }
    }
}
