//! Error types for the Tsudoi client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Gave up reconnecting to the notification stream
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectFailed(u32),
}

/// Errors from parsing a line typed at the prompt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type /help to list commands)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}
