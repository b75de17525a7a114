//! Filename and access validation.
//!
//! Both checks run before any real I/O is attempted: filename validation is
//! a pure string check, and the access checker is a pure inspection of the
//! filesystem through the `FileSystem` port. The calling command prints the
//! diagnostics; the functions themselves stay side-effect free.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Characters that may not appear in a user-entered filename.
///
/// The set deliberately includes path separators: it is applied to bare
/// filename components typed at a prompt, never to multi-segment paths.
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Why a filename failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The name is empty after trimming whitespace.
    #[error("Filename cannot be empty")]
    Empty,
    /// The name contains a forbidden character.
    #[error("Filename contains invalid character '{0}'")]
    ForbiddenCharacter(char),
}

/// Validates that a filename is properly formatted.
///
/// Checks run in order: emptiness first, then each forbidden character in
/// set order. Only the first forbidden character found is reported.
///
/// # Errors
///
/// Returns [`NameError::Empty`] for a blank name and
/// [`NameError::ForbiddenCharacter`] naming the offending character.
pub fn validate_filename(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }
    for ch in FORBIDDEN_CHARS {
        if name.contains(ch) {
            return Err(NameError::ForbiddenCharacter(ch));
        }
    }
    Ok(())
}

/// The access mode to check before attempting an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// The file will be opened for reading.
    Read,
    /// The file will be created or overwritten.
    Write,
}

/// Why an access check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The path does not exist.
    #[error("The file '{0}' does not exist")]
    Missing(String),
    /// The path exists but is not a regular file.
    #[error("'{0}' is not a file")]
    NotAFile(String),
    /// The file exists but cannot be read by this process.
    #[error("You don't have permission to read '{0}'")]
    ReadDenied(String),
    /// The file exists but cannot be written by this process.
    #[error("You don't have permission to write to '{0}'")]
    WriteDenied(String),
    /// The file does not exist and its containing directory is not writable.
    #[error("You don't have permission to write to the directory containing '{0}'")]
    DirectoryWriteDenied(String),
}

/// Checks whether a file can be accessed in the given mode.
///
/// Read mode verifies, in order: the path exists, it is a regular file, and
/// it is readable. The first failing check short-circuits. Write mode
/// verifies writability of the file when it exists, or of its containing
/// directory (the current directory when the name has no directory part)
/// when it does not. Nothing on disk is modified.
///
/// # Errors
///
/// Returns the [`AccessError`] for the first failing check.
pub fn check_access(fs: &dyn FileSystem, name: &str, mode: AccessMode) -> Result<(), AccessError> {
    let path = Path::new(name);
    match mode {
        AccessMode::Read => {
            if !fs.exists(path) {
                return Err(AccessError::Missing(name.to_string()));
            }
            if !fs.metadata(path).is_ok_and(|meta| meta.is_file) {
                return Err(AccessError::NotAFile(name.to_string()));
            }
            if !fs.readable(path) {
                return Err(AccessError::ReadDenied(name.to_string()));
            }
        }
        AccessMode::Write => {
            if fs.exists(path) {
                if !fs.writable(path) {
                    return Err(AccessError::WriteDenied(name.to_string()));
                }
            } else {
                let dir = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                if !fs.writable(dir) {
                    return Err(AccessError::DirectoryWriteDenied(name.to_string()));
                }
            }
        }
    }
    Ok(())
}
