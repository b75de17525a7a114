//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use crate::ports::filesystem::{FileMeta, FileSystem, FsError};
use crate::tape::replayer::TapeReplayer;

/// Replays recorded filesystem operations from a tape.
pub struct ReplayingFileSystem {
    replayer: Mutex<TapeReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a tape replayer.
    #[must_use]
    pub fn new(replayer: TapeReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_step("fs", method).output.clone()
    }
}

/// Extracts a `Result<T, FsError>` from a recorded output value.
///
/// Expects `{"Ok": <value>}` or `{"Err": <classified error>}`, the
/// convention used by the recording adapters.
fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, FsError> {
    if let Some(err) = output.get("Err") {
        let parsed: FsError = serde_json::from_value(err.clone())
            .unwrap_or_else(|e| panic!("{context}: failed to deserialize recorded error: {e}"));
        return Err(parsed);
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .unwrap_or_else(|e| panic!("{context}: failed to deserialize recorded value: {e}"))
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, FsError> {
        replay_result(&self.next_output("read_to_string"), "fs::read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), FsError> {
        let output = self.next_output("write");
        if let Some(err) = output.get("Err") {
            let parsed: FsError = serde_json::from_value(err.clone())
                .unwrap_or_else(|e| panic!("fs::write: failed to deserialize recorded error: {e}"));
            return Err(parsed);
        }
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        self.next_output("exists").as_bool().expect("fs::exists: expected boolean output")
    }

    fn metadata(&self, _path: &Path) -> Result<FileMeta, FsError> {
        replay_result(&self.next_output("metadata"), "fs::metadata")
    }

    fn readable(&self, _path: &Path) -> bool {
        self.next_output("readable").as_bool().expect("fs::readable: expected boolean output")
    }

    fn writable(&self, _path: &Path) -> bool {
        self.next_output("writable").as_bool().expect("fs::writable: expected boolean output")
    }

    fn absolute(&self, _path: &Path) -> Result<String, FsError> {
        replay_result(&self.next_output("absolute"), "fs::absolute")
    }
}
