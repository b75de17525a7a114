//! Bounded-retry file reading.
//!
//! A read attempt either succeeds, fails permanently (wrong path, wrong
//! type, wrong encoding, no permission), or fails transiently. Transient
//! failures are retried a fixed number of times with a fixed blocking delay
//! between attempts; the classification lives on [`FsError`] so it is shared
//! with the rest of the crate.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::ports::clock::Clock;
use crate::ports::filesystem::{FileSystem, FsError};

/// Attempt budget and inter-attempt delay for a retried read.
///
/// No backoff growth: the delay between attempts is constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of open attempts (treated as at least 1).
    pub max_attempts: u32,
    /// Blocking delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, delay: Duration::from_secs(1) }
    }
}

/// A successful retried read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    /// The full file content.
    pub content: String,
    /// Number of open attempts performed; 1 means first-try success.
    pub attempts: u32,
}

/// Terminal failure of a retried read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// A failure whose cause will not change on retry; no retry was made.
    #[error("{0}")]
    Permanent(FsError),
    /// Transient failures persisted through the whole attempt budget.
    #[error("Failed to read '{path}' after {attempts} attempts. Last error: {last}")]
    Exhausted {
        /// Path that was being read.
        path: String,
        /// Number of attempts performed (equals the policy's budget).
        attempts: u32,
        /// The last transient cause observed.
        last: FsError,
    },
}

/// Reads a file, retrying transient failures within the policy's budget.
///
/// Attempt diagnostics and retry notices are written to `progress` so the
/// interactive caller sees them as they happen. The delay is a real
/// blocking wait through the [`Clock`] port; there is no cancellation path
/// mid-retry.
///
/// # Errors
///
/// Returns [`ReadError::Permanent`] immediately for non-retryable causes
/// and [`ReadError::Exhausted`] when the attempt budget runs out.
pub fn read_with_retries<W: Write>(
    fs: &dyn FileSystem,
    clock: &dyn Clock,
    path: &Path,
    policy: &RetryPolicy,
    progress: &mut W,
) -> Result<ReadOutcome, ReadError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match fs.read_to_string(path) {
            Ok(content) => return Ok(ReadOutcome { content, attempts: attempt }),
            Err(err) if err.is_transient() => {
                let _ = writeln!(
                    progress,
                    "Error reading file (attempt {attempt}/{max_attempts}): {err}"
                );
                if attempt < max_attempts {
                    let _ = writeln!(
                        progress,
                        "Retrying in {} second(s)...",
                        policy.delay.as_secs()
                    );
                    clock.sleep(policy.delay);
                } else {
                    return Err(ReadError::Exhausted {
                        path: path.display().to_string(),
                        attempts: attempt,
                        last: err,
                    });
                }
            }
            Err(err) => return Err(ReadError::Permanent(err)),
        }
    }
}
