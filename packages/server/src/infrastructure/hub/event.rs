//! Events carried by the hub mailbox.

use std::fmt;

use tokio::sync::oneshot;

use super::connection::{Connection, ConnectionId, Payload};

/// One request to the hub coordinator.
pub enum HubEvent {
    /// Start tracking a connection.
    Register {
        id: ConnectionId,
        connection: Box<dyn Connection>,
    },
    /// Stop tracking a connection and close it.
    Unregister(ConnectionId),
    /// Deliver a payload to every registered connection.
    Broadcast(Payload),
    /// Report the number of registered connections.
    Count(oneshot::Sender<usize>),
}

impl HubEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Unregister(_) => "unregister",
            Self::Broadcast(_) => "broadcast",
            Self::Count(_) => "count",
        }
    }
}

impl fmt::Debug for HubEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register { id, .. } => f.debug_struct("Register").field("id", id).finish(),
            Self::Unregister(id) => f.debug_tuple("Unregister").field(id).finish(),
            Self::Broadcast(payload) => f.debug_tuple("Broadcast").field(payload).finish(),
            Self::Count(_) => f.write_str("Count"),
        }
    }
}
