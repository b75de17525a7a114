//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `filelab`.
#[derive(Debug, Parser)]
#[command(name = "filelab", version, about = "Read and rewrite text files interactively")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the error-handling lab: validated file reading with bounded retries.
    Read,
    /// Read a file, transform its content, and write it to a new file.
    Rewrite,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_read_subcommand() {
        let cli = Cli::parse_from(["filelab", "read"]);
        assert!(matches!(cli.command, Command::Read));
    }

    #[test]
    fn parses_rewrite_subcommand() {
        let cli = Cli::parse_from(["filelab", "rewrite"]);
        assert!(matches!(cli.command, Command::Rewrite));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["filelab", "shred"]).is_err());
    }
}
