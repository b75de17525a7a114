//! Live filesystem adapter using `std::fs`.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::ports::filesystem::{FileMeta, FileSystem, FsError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

/// Folds a `std::io::Error` into the classified [`FsError`] taxonomy.
///
/// `NotFound`, `PermissionDenied`, `IsADirectory`, and `InvalidData`
/// (non-UTF-8 content) are permanent; every other kind lands in the
/// retryable `Io` variant.
fn classify(path: &Path, err: &std::io::Error) -> FsError {
    let path = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => FsError::NotFound { path },
        ErrorKind::PermissionDenied => FsError::PermissionDenied { path },
        ErrorKind::IsADirectory => FsError::IsADirectory { path },
        ErrorKind::InvalidData => FsError::InvalidEncoding { path },
        _ => FsError::Io { path, detail: err.to_string() },
    }
}

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|e| classify(path, &e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        std::fs::write(path, contents).map_err(|e| classify(path, &e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn metadata(&self, path: &Path) -> Result<FileMeta, FsError> {
        let meta = std::fs::metadata(path).map_err(|e| classify(path, &e))?;
        let modified = meta.modified().map_err(|e| classify(path, &e))?;
        Ok(FileMeta {
            size: meta.len(),
            modified: DateTime::<Utc>::from(modified),
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
        })
    }

    fn readable(&self, path: &Path) -> bool {
        std::fs::File::open(path).is_ok()
    }

    fn writable(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            // The readonly flag is the portable signal for directories;
            // opening a directory for writing is never valid.
            Ok(meta) if meta.is_dir() => !meta.permissions().readonly(),
            // Append mode probes writability without truncating content
            // or touching the data.
            Ok(_) => OpenOptions::new().append(true).open(path).is_ok(),
            Err(_) => false,
        }
    }

    fn absolute(&self, path: &Path) -> Result<String, FsError> {
        std::fs::canonicalize(path)
            .map(|p| p.display().to_string())
            .map_err(|e| classify(path, &e))
    }
}
