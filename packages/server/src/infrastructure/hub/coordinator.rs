//! Hub coordinator: the single task that owns the registry.
//!
//! Every membership change and every broadcast send goes through the event
//! channel and is applied here one event at a time, so the registry needs no
//! lock. Sends belonging to one broadcast run concurrently inside this task;
//! the next event is not taken until all of them have finished or timed out.

use std::{panic::AssertUnwindSafe, time::Duration};

use futures_util::{FutureExt, future::join_all};
use tokio::{sync::mpsc, task::JoinHandle};

use super::{
    config::HubConfig,
    connection::{Connection, ConnectionId, Payload},
    error::DeliveryError,
    event::HubEvent,
    handle::HubHandle,
    registry::Registry,
};

pub struct Hub {
    registry: Registry,
    events: mpsc::Receiver<HubEvent>,
    config: HubConfig,
}

impl Hub {
    /// Create a hub and the handle used to feed it. The hub does nothing
    /// until [`Hub::run`] is polled.
    pub fn new(config: HubConfig) -> (Self, HubHandle) {
        let (tx, rx) = mpsc::channel(config.channel_capacity);
        let hub = Self {
            registry: Registry::new(),
            events: rx,
            config,
        };
        (hub, HubHandle::new(tx))
    }

    /// Create a hub and run it on its own task.
    pub fn spawn(config: HubConfig) -> (HubHandle, JoinHandle<()>) {
        let (hub, handle) = Self::new(config);
        (handle, tokio::spawn(hub.run()))
    }

    /// Consume events until every [`HubHandle`] has been dropped, then close
    /// the connections that are still registered.
    pub async fn run(mut self) {
        tracing::info!(
            channel_capacity = self.config.channel_capacity,
            send_timeout = ?self.config.send_timeout,
            "Hub started"
        );

        while let Some(event) = self.events.recv().await {
            tracing::trace!(kind = event.kind(), "Hub event received");
            self.handle_event(event).await;
        }

        self.shutdown().await;
    }

    async fn handle_event(&mut self, event: HubEvent) {
        match event {
            HubEvent::Register { id, connection } => self.register(id, connection),
            HubEvent::Unregister(id) => self.unregister(id).await,
            HubEvent::Broadcast(payload) => self.broadcast(payload).await,
            HubEvent::Count(reply) => {
                // The requester may have given up waiting.
                let _ = reply.send(self.registry.len());
            }
        }
    }

    fn register(&mut self, id: ConnectionId, connection: Box<dyn Connection>) {
        if self.registry.add(id, connection) {
            tracing::info!(
                connection_id = %id,
                connections = self.registry.len(),
                "Connection registered"
            );
        } else {
            tracing::debug!(connection_id = %id, "Connection already registered, ignoring");
        }
    }

    async fn unregister(&mut self, id: ConnectionId) {
        match self.registry.remove(&id) {
            Some(mut connection) => {
                close_connection(connection.as_mut(), self.config.send_timeout).await;
                tracing::info!(
                    connection_id = %id,
                    connections = self.registry.len(),
                    "Connection unregistered"
                );
            }
            None => {
                tracing::debug!(connection_id = %id, "Connection not registered, ignoring");
            }
        }
    }

    async fn broadcast(&mut self, payload: Payload) {
        let send_timeout = self.config.send_timeout;
        let payload = &payload;

        let deliveries = self.registry.iter_mut().map(|(id, connection)| {
            let id = *id;
            async move { (id, deliver(connection.as_mut(), payload, send_timeout).await) }
        });
        let results = join_all(deliveries).await;

        let attempted = results.len();
        let mut evicted = 0;
        for (id, result) in results {
            if let Err(error) = result {
                tracing::warn!(connection_id = %id, %error, "Evicting connection after failed send");
                self.evict(id).await;
                evicted += 1;
            }
        }

        tracing::debug!(
            payload = %payload,
            delivered = attempted - evicted,
            evicted,
            "Broadcast complete"
        );
    }

    async fn evict(&mut self, id: ConnectionId) {
        if let Some(mut connection) = self.registry.remove(&id) {
            close_connection(connection.as_mut(), self.config.send_timeout).await;
        }
    }

    async fn shutdown(&mut self) {
        if self.registry.is_empty() {
            tracing::info!("Hub stopped");
            return;
        }

        let remaining = self.registry.len();
        for (_, mut connection) in self.registry.drain() {
            close_connection(connection.as_mut(), self.config.send_timeout).await;
        }
        tracing::info!(closed = remaining, "Hub stopped");
    }
}

/// Send one payload to one connection, turning errors, timeouts and panics
/// into a [`DeliveryError`].
async fn deliver(
    connection: &mut dyn Connection,
    payload: &Payload,
    send_timeout: Option<Duration>,
) -> Result<(), DeliveryError> {
    let send = AssertUnwindSafe(connection.send(payload)).catch_unwind();

    let outcome = match send_timeout {
        Some(limit) => tokio::time::timeout(limit, send)
            .await
            .map_err(|_| DeliveryError::TimedOut(limit))?,
        None => send.await,
    };

    match outcome {
        Ok(result) => result.map_err(DeliveryError::from),
        Err(_) => Err(DeliveryError::Panicked),
    }
}

/// Close a connection without letting a stuck or panicking peer stall the
/// coordinator.
async fn close_connection(connection: &mut dyn Connection, limit: Option<Duration>) {
    let close = AssertUnwindSafe(connection.close()).catch_unwind();

    let outcome = match limit {
        Some(limit) => match tokio::time::timeout(limit, close).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(timeout = ?limit, "Timed out while closing connection");
                return;
            }
        },
        None => close.await,
    };

    if outcome.is_err() {
        tracing::error!("Connection panicked while closing");
    }
}
