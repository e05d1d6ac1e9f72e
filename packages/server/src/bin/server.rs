//! Tsudoi chat server.
//!
//! Serves the room / chat HTTP API and pushes `new-room` / `new-chat`
//! notifications to every WebSocket client connected to `/ws`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-server
//! cargo run --bin tsudoi-server -- --host 0.0.0.0 --port 3000 --send-timeout-ms 0
//! ```

use std::sync::Arc;

use clap::Parser;
use tsudoi_server::{
    domain::{ChatRepository, RoomRepository},
    infrastructure::{
        hub::{DEFAULT_CHANNEL_CAPACITY, Hub, HubConfig},
        repository::{InMemoryChatRepository, InMemoryRoomRepository, inmemory::sample},
    },
    ui::{AppState, Server},
};
use tsudoi_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "tsudoi-server")]
#[command(about = "Chat room server with WebSocket broadcast notifications", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Capacity of the hub event channel
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    channel_capacity: usize,

    /// Per-connection send timeout in milliseconds (0 disables the timeout)
    #[arg(long, default_value = "5000")]
    send_timeout_ms: u64,

    /// Start with empty stores instead of the demo rooms and chats
    #[arg(long)]
    no_sample_data: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Hub
    // 2. Repositories
    // 3. AppState (UseCases)
    // 4. Server

    // 1. Start the hub coordinator
    let config = HubConfig::from_millis(args.channel_capacity, args.send_timeout_ms);
    tracing::info!(
        channel_capacity = config.channel_capacity,
        send_timeout = ?config.send_timeout,
        "Starting hub"
    );
    let (hub, hub_task) = Hub::spawn(config);

    // 2. Create repositories (in-memory database)
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let rooms: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
    let chats: Arc<dyn ChatRepository> = Arc::new(InMemoryChatRepository::new());

    if !args.no_sample_data
        && let Err(e) = sample::seed_sample_data(rooms.as_ref(), chats.as_ref(), clock.as_ref()).await
    {
        tracing::error!("Failed to add sample data: {}", e);
        std::process::exit(1);
    }

    // 3. Wire use cases
    let state = AppState::new(hub, rooms, chats, clock);

    // 4. Run the server
    // The server stops with an error if the hub task ends while serving.
    let server = Server::new(state).with_hub_task(hub_task);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
