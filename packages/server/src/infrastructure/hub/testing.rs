//! In-memory connections for hub tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{
    connection::{Connection, Payload},
    error::ConnectionError,
};

/// How a [`RecordingConnection`] reacts to `send`.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Deliver,
    Fail,
    Hang,
    Panic,
}

pub struct RecordingConnection {
    behavior: Behavior,
    deliveries: mpsc::UnboundedSender<String>,
    closes: Arc<AtomicUsize>,
    closed: bool,
}

/// Test-side view of a [`RecordingConnection`] owned by the hub.
pub struct Probe {
    deliveries: mpsc::UnboundedReceiver<String>,
    closes: Arc<AtomicUsize>,
}

impl Probe {
    /// Payloads delivered so far.
    pub fn received(&mut self) -> Vec<String> {
        let mut received = Vec::new();
        while let Ok(payload) = self.deliveries.try_recv() {
            received.push(payload);
        }
        received
    }

    /// Number of times the underlying stream was actually released.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

pub fn recording(behavior: Behavior) -> (Box<dyn Connection>, Probe) {
    let (tx, rx) = mpsc::unbounded_channel();
    let closes = Arc::new(AtomicUsize::new(0));
    let connection = RecordingConnection {
        behavior,
        deliveries: tx,
        closes: closes.clone(),
        closed: false,
    };
    let probe = Probe {
        deliveries: rx,
        closes,
    };
    (Box::new(connection), probe)
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn send(&mut self, payload: &Payload) -> Result<(), ConnectionError> {
        if self.closed {
            return Err(ConnectionError::Closed);
        }
        match self.behavior {
            Behavior::Deliver => self
                .deliveries
                .send(payload.as_str().to_string())
                .map_err(|e| ConnectionError::Send(e.to_string())),
            Behavior::Fail => Err(ConnectionError::Send("broken pipe".to_string())),
            Behavior::Hang => std::future::pending().await,
            Behavior::Panic => panic!("simulated panic while sending"),
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
