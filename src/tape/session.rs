//! Recording session managing per-port tape recorders.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::TapeRecorder;

/// Manages per-port `TapeRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate tape file. All
/// tapes for one session live in a timestamped directory.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<TapeRecorder>>,
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<TapeRecorder>>,
    /// Output directory containing all tape files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session with a timestamped output directory
    /// under `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tape directory already exists or cannot be
    /// created.
    pub fn new(base: PathBuf) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Tape directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create tape directory: {e}"))?;

        let commit = get_commit_hash();

        let make_recorder = |port: &str| -> Arc<Mutex<TapeRecorder>> {
            let path = output_dir.join(format!("{port}.tape.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(TapeRecorder::new(path, &name, &commit)))
        };

        Ok(Self { fs: make_recorder("fs"), clock: make_recorder("clock"), output_dir })
    }

    /// Finish all recorders and write tape files to disk.
    ///
    /// Consumes the session and writes each port's tape file.
    ///
    /// # Errors
    ///
    /// Returns an error if any tape file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<TapeRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} tape: {e}"))?;
            Ok(())
        }

        finish_one(self.fs, "fs")?;
        finish_one(self.clock, "clock")?;

        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_output_directory_and_finishes() {
        let base = std::env::temp_dir().join("filelab_session_test");
        let session = RecordingSession::new(base.clone());
        assert!(session.is_ok(), "RecordingSession::new() should succeed");

        let session = session.unwrap();
        let dir = session.output_dir.clone();
        assert!(dir.exists(), "Output directory should exist after new()");

        let result = session.finish();
        assert!(result.is_ok(), "finish() should succeed");
        assert!(dir.join("fs.tape.yaml").exists());
        assert!(dir.join("clock.tape.yaml").exists());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn get_commit_hash_returns_string() {
        let hash = get_commit_hash();
        assert!(!hash.is_empty());
    }
}
