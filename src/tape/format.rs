//! Tape data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name ("fs" or "clock").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A tape containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tape {
    /// Human-readable name for this tape.
    pub name: String,
    /// When this tape was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time, for provenance.
    pub commit: String,
    /// Ordered list of interactions.
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tape() -> Tape {
        Tape {
            name: "sample".into(),
            recorded_at: Utc::now(),
            commit: "abc123".into(),
            steps: vec![
                Step {
                    seq: 0,
                    port: "clock".into(),
                    method: "now".into(),
                    input: json!({}),
                    output: json!("2025-06-01T08:00:00Z"),
                },
                Step {
                    seq: 1,
                    port: "fs".into(),
                    method: "read_to_string".into(),
                    input: json!({"path": "notes.txt"}),
                    output: json!({"Ok": "hello"}),
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let tape = sample_tape();
        let yaml = serde_yaml::to_string(&tape).expect("serialize");
        let back: Tape = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(tape, back);
    }
}
