//! `filelab read`: the error-handling lab.
//!
//! Prompts for a filename until validation and the read-access check both
//! pass, reads the file with bounded retries, then reports file information,
//! content statistics, and (on request) a bounded preview of the content.

use std::io::{BufRead, Write};
use std::path::Path;

use super::prompt;
use crate::context::ServiceContext;
use crate::reader::{read_with_retries, RetryPolicy};
use crate::report::{write_file_info, write_stats, ContentStats};
use crate::validate::{check_access, validate_filename, AccessMode};

/// How many characters of content the preview shows before truncating.
const PREVIEW_LIMIT: usize = 500;

/// Execute the `read` command against the given context and I/O streams.
///
/// End of input at any prompt is a clean cancellation: the command prints an
/// interruption notice and returns `Ok(())`.
///
/// # Errors
///
/// Returns an error string only when writing to the output stream fails.
pub fn run_with_context<R: BufRead, W: Write>(
    ctx: &ServiceContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    writeln!(out, "=== Error Handling Lab ===").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "This program demonstrates comprehensive error handling with files.")
        .map_err(|e| format!("write error: {e}"))?;

    let Some(filename) = pick_readable_file(ctx, input, out)? else {
        return Ok(());
    };
    let path = Path::new(&filename);

    let start = ctx.clock.now();
    let outcome = match read_with_retries(
        ctx.fs.as_ref(),
        ctx.clock.as_ref(),
        path,
        &RetryPolicy::default(),
        out,
    ) {
        Ok(outcome) => outcome,
        Err(err) => {
            writeln!(out, "File reading error: {err}").map_err(|e| format!("write error: {e}"))?;
            writeln!(out, "\nProgram finished.").map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
    };
    let end = ctx.clock.now();

    write_file_info(ctx.fs.as_ref(), path, out)?;
    write_stats(ContentStats::of(&outcome.content), elapsed_seconds(start, end), out)?;

    match prompt(input, out, "\nWould you like to see the file content? (y/n): ")? {
        Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
            writeln!(out, "\n--- File Content Start ---")
                .map_err(|e| format!("write error: {e}"))?;
            write_preview(&outcome.content, out)?;
            writeln!(out, "--- File Content End ---").map_err(|e| format!("write error: {e}"))?;
        }
        Some(_) => {}
        None => {
            writeln!(out, "\nProgram interrupted by user.")
                .map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
    }

    writeln!(out, "\nProgram finished.").map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

/// Runs the filename prompt loop until a name passes both the format check
/// and the read-access check.
///
/// Returns `Ok(None)` when the user cancels (end of input, or declining to
/// try another file); the caller exits cleanly.
fn pick_readable_file<R: BufRead, W: Write>(
    ctx: &ServiceContext,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, String> {
    loop {
        let Some(name) = prompt(input, out, "\nEnter the name of a file to read: ")? else {
            writeln!(out, "\nProgram interrupted by user.")
                .map_err(|e| format!("write error: {e}"))?;
            return Ok(None);
        };

        if let Err(err) = validate_filename(&name) {
            writeln!(out, "Error: {err}.").map_err(|e| format!("write error: {e}"))?;
            continue;
        }

        if let Err(err) = check_access(ctx.fs.as_ref(), &name, AccessMode::Read) {
            writeln!(out, "Error: {err}.").map_err(|e| format!("write error: {e}"))?;
            let Some(retry) = prompt(input, out, "Try another file? (y/n): ")? else {
                writeln!(out, "\nProgram interrupted by user.")
                    .map_err(|e| format!("write error: {e}"))?;
                return Ok(None);
            };
            if !retry.trim().eq_ignore_ascii_case("y") {
                writeln!(out, "Exiting program.").map_err(|e| format!("write error: {e}"))?;
                return Ok(None);
            }
            continue;
        }

        return Ok(Some(name));
    }
}

/// Writes the first [`PREVIEW_LIMIT`] characters of content, appending a
/// truncation notice when the content is longer.
fn write_preview<W: Write>(content: &str, out: &mut W) -> Result<(), String> {
    if content.chars().count() > PREVIEW_LIMIT {
        let head: String = content.chars().take(PREVIEW_LIMIT).collect();
        writeln!(out, "{head}...").map_err(|e| format!("write error: {e}"))?;
        writeln!(out, "[Content truncated]").map_err(|e| format!("write error: {e}"))?;
    } else {
        writeln!(out, "{content}").map_err(|e| format!("write error: {e}"))?;
    }
    Ok(())
}

/// Seconds between two clock samples, for the read-time statistic.
#[allow(clippy::cast_precision_loss)]
fn elapsed_seconds(start: chrono::DateTime<chrono::Utc>, end: chrono::DateTime<chrono::Utc>) -> f64 {
    (end - start).num_microseconds().map_or(0.0, |us| us as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use chrono::Utc;
    use serde_json::json;

    use crate::tape::config::TapeConfig;
    use crate::tape::format::{Step, Tape};

    fn write_tape(path: &Path, port: &str, steps: Vec<(&str, serde_json::Value)>) {
        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(i, (method, output))| Step {
                seq: i as u64,
                port: port.into(),
                method: method.into(),
                input: json!({}),
                output,
            })
            .collect();
        let tape =
            Tape { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), steps };
        std::fs::write(path, serde_yaml::to_string(&tape).unwrap()).unwrap();
    }

    fn replaying_ctx(
        dir: &Path,
        fs_steps: Vec<(&str, serde_json::Value)>,
        clock_steps: Vec<(&str, serde_json::Value)>,
    ) -> ServiceContext {
        std::fs::create_dir_all(dir).unwrap();
        let fs_path = dir.join("fs.tape.yaml");
        let clock_path = dir.join("clock.tape.yaml");
        write_tape(&fs_path, "fs", fs_steps);
        write_tape(&clock_path, "clock", clock_steps);
        ServiceContext::replaying_from(&TapeConfig { fs: Some(fs_path), clock: Some(clock_path) })
            .unwrap()
    }

    fn meta_json() -> serde_json::Value {
        json!({"Ok": {
            "size": 24,
            "modified": "2025-06-01T08:00:00Z",
            "is_file": true,
            "is_dir": false
        }})
    }

    #[test]
    fn happy_path_reports_info_stats_and_content() {
        let dir = std::env::temp_dir().join("filelab_read_cmd_happy");
        let ctx = replaying_ctx(
            &dir,
            vec![
                ("exists", json!(true)),
                ("metadata", meta_json()),
                ("readable", json!(true)),
                ("read_to_string", json!({"Ok": "Hello world\nSecond line\n"})),
                ("metadata", meta_json()),
                ("absolute", json!({"Ok": "/work/notes.txt"})),
            ],
            vec![
                ("now", json!("2025-06-01T08:00:00Z")),
                ("now", json!("2025-06-01T08:00:02Z")),
            ],
        );

        let mut input = Cursor::new(b"notes.txt\ny\n".to_vec());
        let mut out = Vec::new();
        run_with_context(&ctx, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("=== Error Handling Lab ==="));
        assert!(text.contains("File Information:"));
        assert!(text.contains("Filename: notes.txt"));
        assert!(text.contains("Size: 24.00 B (24 bytes)"));
        assert!(text.contains("Full path: /work/notes.txt"));
        assert!(text.contains("Lines: 3"));
        assert!(text.contains("Words: 4"));
        assert!(text.contains("Characters: 24"));
        assert!(text.contains("Read time: 2.0000 seconds"));
        assert!(text.contains("--- File Content Start ---"));
        assert!(text.contains("Hello world\nSecond line"));
        assert!(text.contains("Program finished."));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn exhausted_retries_report_the_failure_and_finish() {
        let dir = std::env::temp_dir().join("filelab_read_cmd_exhausted");
        let io_err = json!({"Err": {"kind": "io", "path": "flaky.txt", "detail": "device busy"}});
        let ctx = replaying_ctx(
            &dir,
            vec![
                ("exists", json!(true)),
                ("metadata", meta_json()),
                ("readable", json!(true)),
                ("read_to_string", io_err.clone()),
                ("read_to_string", io_err.clone()),
                ("read_to_string", io_err),
            ],
            vec![
                ("now", json!("2025-06-01T08:00:00Z")),
                ("sleep", json!(null)),
                ("sleep", json!(null)),
            ],
        );

        let mut input = Cursor::new(b"flaky.txt\n".to_vec());
        let mut out = Vec::new();
        run_with_context(&ctx, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Error reading file (attempt 1/3): device busy"));
        assert!(text.contains("Error reading file (attempt 3/3): device busy"));
        assert!(text.contains("Retrying in 1 second(s)..."));
        assert!(text.contains(
            "File reading error: Failed to read 'flaky.txt' after 3 attempts. Last error: device busy"
        ));
        assert!(text.contains("Program finished."));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_name_reprompts_and_declining_exits_cleanly() {
        let ctx = ServiceContext::live();
        let mut input = Cursor::new(b"bad<name\nfilelab_surely_missing.txt\nn\n".to_vec());
        let mut out = Vec::new();
        run_with_context(&ctx, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Error: Filename contains invalid character '<'."));
        assert!(text.contains("Error: The file 'filelab_surely_missing.txt' does not exist."));
        assert!(text.contains("Try another file? (y/n): "));
        assert!(text.contains("Exiting program."));
    }

    #[test]
    fn end_of_input_at_the_first_prompt_is_a_clean_cancellation() {
        let ctx = ServiceContext::live();
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        run_with_context(&ctx, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Program interrupted by user."));
    }

    #[test]
    fn long_content_preview_is_truncated_with_a_notice() {
        let mut out = Vec::new();
        let content = "x".repeat(600);
        write_preview(&content, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&"x".repeat(500)));
        assert!(!text.contains(&"x".repeat(501)));
        assert!(text.contains("[Content truncated]"));
    }

    #[test]
    fn short_content_preview_is_printed_whole() {
        let mut out = Vec::new();
        write_preview("short content", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "short content\n");
    }
}
