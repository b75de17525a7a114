//! Tape configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Tape;
use super::replayer::TapeReplayer;

/// Per-port tape file paths. Each port can optionally have its own tape for
/// replay. Ports without a tape path panic if called during replay.
#[derive(Debug, Clone, Default)]
pub struct TapeConfig {
    /// Path to the filesystem port tape file.
    pub fs: Option<PathBuf>,
    /// Path to the clock port tape file.
    pub clock: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the filesystem port.
    pub fs: Option<TapeReplayer>,
    /// Replayer for the clock port.
    pub clock: Option<TapeReplayer>,
}

impl TapeConfig {
    /// Returns a config where all port paths are `None`. Any port called
    /// during replay will panic because no tape is loaded.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Load a single tape file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_tape(path: &Path) -> Result<TapeReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tape file {}: {e}", path.display()))?;
        let tape: Tape = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse tape file {}: {e}", path.display()))?;
        Ok(TapeReplayer::new(&tape))
    }

    /// Load all configured per-port tape files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured tape file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            fs: self.fs.as_deref().map(Self::load_tape).transpose()?,
            clock: self.clock.as_deref().map(Self::load_tape).transpose()?,
        })
    }
}
