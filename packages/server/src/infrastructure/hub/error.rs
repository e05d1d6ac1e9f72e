//! Hub error types.

use std::time::Duration;

use thiserror::Error;

use crate::domain::NotifyError;

/// Errors returned to producers of hub events.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HubError {
    /// The coordinator task has stopped and no longer receives events.
    #[error("hub is no longer running")]
    Closed,
}

impl From<HubError> for NotifyError {
    fn from(error: HubError) -> Self {
        match error {
            HubError::Closed => NotifyError::Closed,
        }
    }
}

/// Errors raised by a single connection's write path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("connection is already closed")]
    Closed,

    #[error("failed to send frame: {0}")]
    Send(String),
}

/// Why a delivery to one connection failed during a broadcast.
///
/// Every variant leads to eviction of that connection only.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("send did not complete within {0:?}")]
    TimedOut(Duration),

    #[error("send panicked")]
    Panicked,
}
