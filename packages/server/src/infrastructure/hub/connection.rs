//! Transport-agnostic connection abstraction used by the hub.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Notification;

use super::error::ConnectionError;

/// Identity of one upgraded client link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A text frame delivered to every registered connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payload(Arc<str>);

impl Payload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Notification> for Payload {
    fn from(notification: Notification) -> Self {
        Self(Arc::from(notification.as_wire()))
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self(Arc::from(text))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write half of a connection, owned by the hub coordinator once registered.
#[async_trait]
pub trait Connection: Send {
    /// Push one payload to the peer.
    async fn send(&mut self, payload: &Payload) -> Result<(), ConnectionError>;

    /// Release the underlying stream. Calling this on a closed connection
    /// must be a no-op.
    async fn close(&mut self);
}
