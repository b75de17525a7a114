//! Replays recorded interactions from a tape.

use std::collections::HashMap;

use super::format::{Step, Tape};

/// Key for indexing steps by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays steps from a loaded tape, serving them sequentially per
/// port/method pair.
pub struct TapeReplayer {
    /// Per port+method queue of steps (in order).
    queues: HashMap<PortMethodKey, Vec<Step>>,
    /// Per port+method cursor tracking position.
    cursors: HashMap<PortMethodKey, usize>,
}

impl TapeReplayer {
    /// Create a new replayer from a loaded tape.
    #[must_use]
    pub fn new(tape: &Tape) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Step>> = HashMap::new();
        for step in &tape.steps {
            let key = PortMethodKey { port: step.port.clone(), method: step.method.clone() };
            queues.entry(key).or_default().push(step.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next step for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the tape has no (more) steps for the given port/method
    /// combination, with a message showing what was requested versus what
    /// the tape contains.
    pub fn next_step(&mut self, port: &str, method: &str) -> &Step {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let queue = self.queues.get(&key).unwrap_or_else(|| {
            let available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            panic!(
                "Tape exhausted: no steps recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        });

        let cursor = self.cursors.get_mut(&key).expect("cursor must exist");
        assert!(
            *cursor < queue.len(),
            "Tape exhausted: all {count} steps for port={port:?} method={method:?} \
             have been consumed. Last step was seq={last_seq}.",
            count = queue.len(),
            last_seq = queue.last().map_or(0, |s| s.seq),
        );

        let step = &queue[*cursor];
        *cursor += 1;
        step
    }
}
