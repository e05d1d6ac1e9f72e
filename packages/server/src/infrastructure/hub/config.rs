//! Hub configuration.

use std::time::Duration;

/// Default capacity of the hub event channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default upper bound for a single send during a broadcast.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubConfig {
    /// Number of events that can wait for the coordinator before producers
    /// start waiting for capacity. Always at least 1.
    pub channel_capacity: usize,
    /// Per-connection send timeout. `None` lets a send block indefinitely.
    pub send_timeout: Option<Duration>,
}

impl HubConfig {
    pub fn new(channel_capacity: usize, send_timeout: Option<Duration>) -> Self {
        Self {
            channel_capacity: channel_capacity.max(1),
            send_timeout,
        }
    }

    /// Build a config from command-line style values, where a timeout of
    /// `0` milliseconds disables the timeout.
    pub fn from_millis(channel_capacity: usize, send_timeout_ms: u64) -> Self {
        let send_timeout = (send_timeout_ms > 0).then(|| Duration::from_millis(send_timeout_ms));
        Self::new(channel_capacity, send_timeout)
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY, Some(DEFAULT_SEND_TIMEOUT))
    }
}
