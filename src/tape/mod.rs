//! Record/replay tapes for deterministic sessions.
//!
//! A tape is a YAML file holding an ordered list of port interactions.
//! Recording wraps the live adapters and captures every call; replaying
//! serves the recorded outputs back without touching the disk or the real
//! clock. `FILELAB_RECORD=<dir>` records a full session from the CLI.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
