//! Service context bundling the port trait objects.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::adapters::recording::{RecordingClock, RecordingFileSystem};
use crate::adapters::replaying::{ReplayingClock, ReplayingFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::{FileMeta, FileSystem, FsError};
use crate::tape::config::TapeConfig;
use crate::tape::session::RecordingSession;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Clock for obtaining the current time and sleeping.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O and access inspection.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a recording context that captures all port interactions.
    ///
    /// Live adapters do the actual work; every call is also written to
    /// per-port tape files in a timestamped directory under `base` when the
    /// returned session is finished. This backs the `FILELAB_RECORD`
    /// mechanism.
    ///
    /// # Errors
    ///
    /// Returns an error if the tape directory cannot be created.
    pub fn recording_at(base: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(base)?;
        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock))),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from per-port tape files.
    ///
    /// Each port can have its own tape file. Ports without a configured tape
    /// use a panicking adapter that fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured tape file cannot be read or parsed.
    pub fn replaying_from(config: &TapeConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in TapeConfig — no tape loaded for clock");
    }
    fn sleep(&self, _duration: Duration) {
        panic!("Clock port not configured in TapeConfig — no tape loaded for clock");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(&self, _path: &std::path::Path) -> Result<String, FsError> {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn write(&self, _path: &std::path::Path, _contents: &str) -> Result<(), FsError> {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn exists(&self, _path: &std::path::Path) -> bool {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn metadata(&self, _path: &std::path::Path) -> Result<FileMeta, FsError> {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn readable(&self, _path: &std::path::Path) -> bool {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn writable(&self, _path: &std::path::Path) -> bool {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
    fn absolute(&self, _path: &std::path::Path) -> Result<String, FsError> {
        panic!("FileSystem port not configured in TapeConfig — no tape loaded for fs");
    }
}
