//! Tsudoi CLI client.
//!
//! Prints room / chat notifications as they arrive and talks to the HTTP API
//! through slash commands (`/rooms`, `/room`, `/chats`, `/chat`, `/quit`).
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-client -- --username Alice
//! cargo run --bin tsudoi-client -- -u http://127.0.0.1:3000 -n Bob
//! ```

use clap::Parser;

use tsudoi_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "tsudoi-client")]
#[command(about = "Tsudoi chat client with live room and chat notifications", long_about = None)]
struct Args {
    /// Server base URL
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Name used when posting chats
    #[arg(short = 'n', long, default_value = "anonymous")]
    username: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = tsudoi_client::run_client(args.url, args.username).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
