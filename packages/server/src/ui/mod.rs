//! HTTP / WebSocket server.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ServerError;
pub use server::{Server, router};
pub use state::AppState;
