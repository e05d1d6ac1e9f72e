//! Server error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The hub coordinator finished while the server was still accepting
    /// connections. Notifications can no longer be delivered.
    #[error("hub task stopped while the server was running")]
    HubStopped,
}
