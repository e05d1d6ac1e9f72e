//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp in JST (milliseconds)
    fn now_jst_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_jst_millis(&self) -> i64 {
        get_jst_timestamp()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_jst_millis(&self) -> i64 {
        self.fixed_time
    }
}

fn jst_offset() -> Option<FixedOffset> {
    FixedOffset::east_opt(JST_OFFSET_SECS)
}

/// Get current Unix timestamp in JST (milliseconds)
///
/// A Unix timestamp does not depend on the offset; the conversion only
/// documents which wall clock the rest of the code renders it in.
pub fn get_jst_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to JST RFC 3339 format
///
/// Returns an empty string when the timestamp is outside the range chrono
/// can represent.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    match (DateTime::from_timestamp_millis(timestamp_millis), jst_offset()) {
        (Some(dt), Some(offset)) => dt.with_timezone(&offset).to_rfc3339(),
        _ => String::new(),
    }
}

/// Format a Unix timestamp (milliseconds) as `HH:MM:SS` in JST
pub fn timestamp_to_jst_clock(timestamp_millis: i64) -> String {
    match (DateTime::from_timestamp_millis(timestamp_millis), jst_offset()) {
        (Some(dt), Some(offset)) => dt.with_timezone(&offset).format("%H:%M:%S").to_string(),
        _ => String::from("--:--:--"),
    }
}
