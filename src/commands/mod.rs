//! Command dispatch and handlers.

pub mod read;
pub mod rewrite;

use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::tape::session::RecordingSession;

/// Dispatch a parsed command to its handler.
///
/// When `FILELAB_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port tape files in a timestamped directory under it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = if let Ok(path) = env::var("FILELAB_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        dispatch_with_context(command, &ctx, &mut input, &mut output)
    };

    // Finish recording after the command completes (even on error).
    if let Some(session) = session {
        // Drop the context first to release the recorder references.
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context and I/O streams.
fn dispatch_with_context<R: BufRead, W: Write>(
    command: &Command,
    ctx: &ServiceContext,
    input: &mut R,
    output: &mut W,
) -> Result<(), String> {
    match command {
        Command::Read => read::run_with_context(ctx, input, output),
        Command::Rewrite => rewrite::run_with_context(ctx, input, output),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

/// Writes a prompt, flushes, and reads one line of input.
///
/// Returns `Ok(None)` on end of input, which both commands treat as a clean
/// cancellation. The trailing line break is stripped; interior whitespace is
/// preserved.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>, String> {
    write!(out, "{text}").map_err(|e| format!("write error: {e}"))?;
    out.flush().map_err(|e| format!("flush error: {e}"))?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| format!("read error: {e}"))?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
