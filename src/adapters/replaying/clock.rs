//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;
use crate::tape::replayer::TapeReplayer;

/// Replays recorded clock values from a tape.
///
/// Replayed sleeps consume their recorded step and return immediately, so
/// retry loops replay at full speed.
pub struct ReplayingClock {
    replayer: Mutex<TapeReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a tape replayer.
    #[must_use]
    pub fn new(replayer: TapeReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_step("clock", "now").output.clone()
        };
        serde_json::from_value(output).expect("clock::now: failed to deserialize DateTime<Utc>")
    }

    fn sleep(&self, _duration: Duration) {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        let _ = replayer.next_step("clock", "sleep");
    }
}
