//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::ports::filesystem::{FileMeta, FileSystem, FsError};
use crate::tape::recorder::TapeRecorder;

/// Records filesystem interactions while delegating to an inner
/// implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<TapeRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<TapeRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: &'a str,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let result = self.inner.read_to_string(path);
        let input = PathInput { path: &path.display().to_string() };
        record_result(&self.recorder, "fs", "read_to_string", &input, &result);
        result
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        let result = self.inner.write(path, contents);
        let input = WriteInput { path: &path.display().to_string(), contents };
        record_result(&self.recorder, "fs", "write", &input, &result);
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        let input = PathInput { path: &path.display().to_string() };
        record_interaction(&self.recorder, "fs", "exists", &input, &result);
        result
    }

    fn metadata(&self, path: &Path) -> Result<FileMeta, FsError> {
        let result = self.inner.metadata(path);
        let input = PathInput { path: &path.display().to_string() };
        record_result(&self.recorder, "fs", "metadata", &input, &result);
        result
    }

    fn readable(&self, path: &Path) -> bool {
        let result = self.inner.readable(path);
        let input = PathInput { path: &path.display().to_string() };
        record_interaction(&self.recorder, "fs", "readable", &input, &result);
        result
    }

    fn writable(&self, path: &Path) -> bool {
        let result = self.inner.writable(path);
        let input = PathInput { path: &path.display().to_string() };
        record_interaction(&self.recorder, "fs", "writable", &input, &result);
        result
    }

    fn absolute(&self, path: &Path) -> Result<String, FsError> {
        let result = self.inner.absolute(path);
        let input = PathInput { path: &path.display().to_string() };
        record_result(&self.recorder, "fs", "absolute", &input, &result);
        result
    }
}
