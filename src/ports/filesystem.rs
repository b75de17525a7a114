//! Filesystem port for file I/O and access inspection.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classified filesystem error.
///
/// Every disk failure crossing the port boundary is folded into one of these
/// variants. The first four are permanent: retrying cannot change the
/// outcome. `Io` covers everything else and is the only retryable variant.
/// The enum is serializable so recorded tapes can carry classified errors,
/// not just message strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FsError {
    /// The path does not exist.
    #[error("the file '{path}' was not found")]
    NotFound {
        /// Path that was requested.
        path: String,
    },
    /// The process lacks permission for the requested operation.
    #[error("permission denied for '{path}'")]
    PermissionDenied {
        /// Path that was requested.
        path: String,
    },
    /// The path names a directory where a regular file was expected.
    #[error("'{path}' is a directory, not a file")]
    IsADirectory {
        /// Path that was requested.
        path: String,
    },
    /// The file contents are not valid UTF-8.
    #[error("the file '{path}' contains bytes that cannot be decoded as UTF-8")]
    InvalidEncoding {
        /// Path that was requested.
        path: String,
    },
    /// Any other I/O-level failure. Plausibly temporary, eligible for retry.
    #[error("{detail}")]
    Io {
        /// Path that was requested.
        path: String,
        /// Message from the underlying I/O error.
        detail: String,
    },
}

impl FsError {
    /// Returns `true` if retrying the operation could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Metadata snapshot for a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Size in bytes.
    pub size: u64,
    /// Last-modified time.
    pub modified: DateTime<Utc>,
    /// Whether the path is a regular file.
    pub is_file: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
}

/// Provides filesystem access for reading, writing, and inspecting files.
///
/// Abstracting the filesystem allows deterministic replay and lets tests
/// inject failure sequences without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns a classified [`FsError`]; only [`FsError::Io`] is retryable.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns size, mtime, and type information for a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be inspected.
    fn metadata(&self, path: &Path) -> Result<FileMeta, FsError>;

    /// Returns `true` if the current process can read the path.
    ///
    /// A pure inspection; nothing on disk is modified.
    fn readable(&self, path: &Path) -> bool;

    /// Returns `true` if the current process can write to the path.
    ///
    /// For directories this reports whether new entries can be created in
    /// them. A pure inspection; nothing on disk is modified.
    fn writable(&self, path: &Path) -> bool;

    /// Resolves a path to its absolute, canonical display form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn absolute(&self, path: &Path) -> Result<String, FsError>;
}
