//! Producer-side handle to a running hub.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{Notification, Notifier, NotifyError};

use super::{
    connection::{Connection, ConnectionId, Payload},
    error::HubError,
    event::HubEvent,
};

/// Cloneable sender side of the hub mailbox.
///
/// Every method only enqueues an event; none waits for the coordinator to
/// apply it, except for transient waits on channel capacity. The hub keeps
/// running while at least one handle is alive.
#[derive(Debug, Clone)]
pub struct HubHandle {
    events: mpsc::Sender<HubEvent>,
}

impl HubHandle {
    pub(super) fn new(events: mpsc::Sender<HubEvent>) -> Self {
        Self { events }
    }

    /// Hand a connection over to the hub.
    ///
    /// If the hub has stopped, the connection is closed before returning
    /// [`HubError::Closed`].
    pub async fn register(
        &self,
        id: ConnectionId,
        connection: Box<dyn Connection>,
    ) -> Result<(), HubError> {
        match self.events.send(HubEvent::Register { id, connection }).await {
            Ok(()) => Ok(()),
            Err(mpsc::error::SendError(event)) => {
                if let HubEvent::Register { mut connection, .. } = event {
                    connection.close().await;
                }
                Err(HubError::Closed)
            }
        }
    }

    /// Ask the hub to forget and close a connection.
    pub async fn unregister(&self, id: ConnectionId) -> Result<(), HubError> {
        self.send(HubEvent::Unregister(id)).await
    }

    /// Ask the hub to deliver a payload to every registered connection.
    pub async fn broadcast(&self, payload: impl Into<Payload>) -> Result<(), HubError> {
        self.send(HubEvent::Broadcast(payload.into())).await
    }

    /// Number of registered connections once every event enqueued before this
    /// call has been applied.
    pub async fn connection_count(&self) -> Result<usize, HubError> {
        let (reply, count) = oneshot::channel();
        self.send(HubEvent::Count(reply)).await?;
        count.await.map_err(|_| HubError::Closed)
    }

    /// Whether the coordinator has stopped.
    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }

    async fn send(&self, event: HubEvent) -> Result<(), HubError> {
        self.events.send(event).await.map_err(|_| HubError::Closed)
    }
}

#[async_trait]
impl Notifier for HubHandle {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        self.broadcast(notification).await.map_err(NotifyError::from)
    }
}
