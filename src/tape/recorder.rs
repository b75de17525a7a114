//! Records interactions into a tape file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Step, Tape};

/// Records interactions and writes them as a YAML tape file.
#[derive(Debug)]
pub struct TapeRecorder {
    path: PathBuf,
    name: String,
    commit: String,
    steps: Vec<Step>,
    next_seq: u64,
}

impl TapeRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            commit: commit.into(),
            steps: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let step = Step {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        };
        self.next_seq += 1;
        self.steps.push(step);
    }

    /// Finish recording and write the tape YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let tape = Tape {
            name: self.name,
            recorded_at: Utc::now(),
            commit: self.commit,
            steps: self.steps,
        };
        let yaml = serde_yaml::to_string(&tape).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
