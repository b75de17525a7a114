//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record_interaction;
use crate::ports::clock::Clock;
use crate::tape::recorder::TapeRecorder;

/// Records clock interactions while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<TapeRecorder>>,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<TapeRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct SleepInput {
    millis: u64,
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        record_interaction(&self.recorder, "clock", "now", &Empty {}, &now);
        now
    }

    fn sleep(&self, duration: Duration) {
        self.inner.sleep(duration);
        let input = SleepInput {
            millis: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        };
        record_interaction(&self.recorder, "clock", "sleep", &input, &());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::clock::LiveClock;
    use crate::tape::format::Tape;

    #[test]
    fn records_now_and_sleep() {
        let dir = std::env::temp_dir().join("filelab_rec_clock_test");
        std::fs::create_dir_all(&dir).unwrap();
        let tape_path = dir.join("clock.tape.yaml");

        let recorder = Arc::new(Mutex::new(TapeRecorder::new(&tape_path, "test", "abc")));

        {
            let clock = RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder));
            let _ = clock.now();
            clock.sleep(Duration::from_millis(1));
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&tape_path).unwrap();
        let tape: Tape = serde_yaml::from_str(&content).unwrap();
        assert_eq!(tape.steps.len(), 2);
        assert_eq!(tape.steps[0].method, "now");
        assert_eq!(tape.steps[1].method, "sleep");
        assert_eq!(tape.steps[1].input["millis"], 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
