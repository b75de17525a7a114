//! Clock port for obtaining the current time and sleeping.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Provides the current time and a blocking delay.
///
/// Abstracting time access keeps retry delays and elapsed-time measurement
/// deterministic during replay: a recorded clock serves fixed timestamps and
/// a replayed `sleep` returns immediately.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Blocks the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}
