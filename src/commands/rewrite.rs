//! `filelab rewrite`: the read & write challenge.
//!
//! Reads a file in a single attempt, applies a chosen transformation, and
//! writes the result to a new file, confirming before overwriting anything
//! that already exists.

use std::io::{BufRead, Write};
use std::path::Path;

use super::prompt;
use crate::context::ServiceContext;
use crate::ports::filesystem::FsError;
use crate::transform::Transformation;
use crate::validate::{check_access, validate_filename, AccessMode};

/// Execute the `rewrite` command against the given context and I/O streams.
///
/// Every failure is reported as a printed diagnostic followed by a clean
/// return; end of input at any prompt cancels the operation.
///
/// # Errors
///
/// Returns an error string only when writing to the output stream fails.
pub fn run_with_context<R: BufRead, W: Write>(
    ctx: &ServiceContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    writeln!(out, "=== File Read & Write Challenge ===")
        .map_err(|e| format!("write error: {e}"))?;

    let Some(input_name) = prompt(input, out, "Enter the name of the file to read: ")? else {
        return cancelled(out);
    };

    let content = match ctx.fs.read_to_string(Path::new(&input_name)) {
        Ok(content) => content,
        Err(FsError::PermissionDenied { .. }) => {
            writeln!(out, "Error: You don't have permission to read '{input_name}'.")
                .map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
        Err(err @ FsError::Io { .. }) => {
            writeln!(out, "Unexpected error reading '{input_name}': {err}")
                .map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
        Err(err) => {
            writeln!(out, "Error: {err}.").map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
    };

    let Some(transformation) = choose_transformation(input, out)? else {
        return cancelled(out);
    };
    let modified = transformation.apply(&content);

    let Some(output_name) =
        prompt(input, out, "Enter the name of the file to write the modified content to: ")?
    else {
        return cancelled(out);
    };

    if let Err(err) = validate_filename(&output_name) {
        writeln!(out, "Error: {err}.").map_err(|e| format!("write error: {e}"))?;
        return Ok(());
    }
    if let Err(err) = check_access(ctx.fs.as_ref(), &output_name, AccessMode::Write) {
        writeln!(out, "Error: {err}.").map_err(|e| format!("write error: {e}"))?;
        return Ok(());
    }

    let output_path = Path::new(&output_name);
    if ctx.fs.exists(output_path) {
        let question = format!("File '{output_name}' already exists. Overwrite? (y/n): ");
        let Some(answer) = prompt(input, out, &question)? else {
            return cancelled(out);
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "Operation cancelled.").map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
    }

    match ctx.fs.write(output_path, &modified) {
        Ok(()) => {
            writeln!(out, "Successfully wrote modified content to '{output_name}'.")
                .map_err(|e| format!("write error: {e}"))?;
            writeln!(
                out,
                "Modified {} characters using '{}' modification.",
                content.chars().count(),
                transformation.label()
            )
            .map_err(|e| format!("write error: {e}"))?;
        }
        Err(FsError::PermissionDenied { .. }) => {
            writeln!(out, "Error: You don't have permission to write to '{output_name}'.")
                .map_err(|e| format!("write error: {e}"))?;
        }
        Err(err) => {
            writeln!(out, "Unexpected error writing to '{output_name}': {err}")
                .map_err(|e| format!("write error: {e}"))?;
        }
    }

    Ok(())
}

/// Presents the transformation menu and reads the user's choice.
///
/// Unrecognized input falls back to uppercase. Returns `Ok(None)` only on
/// end of input.
fn choose_transformation<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Transformation>, String> {
    writeln!(out, "\nChoose a modification type:").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "1. Convert to UPPERCASE").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "2. Convert to lowercase").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "3. Capitalize each line").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "4. Reverse the order of lines").map_err(|e| format!("write error: {e}"))?;

    let Some(choice) = prompt(input, out, "Enter your choice (1-4): ")? else {
        return Ok(None);
    };
    Ok(Some(Transformation::from_choice(&choice)))
}

/// Prints the cancellation notice used by every end-of-input path.
fn cancelled<W: Write>(out: &mut W) -> Result<(), String> {
    writeln!(out, "\nOperation cancelled by user.").map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run(stdin: &str) -> String {
        let ctx = ServiceContext::live();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        run_with_context(&ctx, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn missing_input_file_prints_a_diagnostic_and_stops() {
        let text = run("filelab_rw_missing_input.txt\n");
        assert!(text.contains("Error: the file 'filelab_rw_missing_input.txt' was not found."));
        assert!(!text.contains("Choose a modification type"));
    }

    #[test]
    fn output_name_with_forbidden_character_is_rejected() {
        let dir = temp_dir("filelab_rw_cmd_badname");
        let source = dir.join("input.txt");
        std::fs::write(&source, "content").unwrap();

        let stdin = format!("{}\n1\nbad|name.txt\n", source.display());
        let text = run(&stdin);
        assert!(text.contains("Error: Filename contains invalid character '|'."));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn menu_lists_all_four_choices_and_defaults_on_nonsense() {
        let mut input = Cursor::new(b"banana\n".to_vec());
        let mut out = Vec::new();
        let choice = choose_transformation(&mut input, &mut out).unwrap();
        assert_eq!(choice, Some(Transformation::Uppercase));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Convert to UPPERCASE"));
        assert!(text.contains("2. Convert to lowercase"));
        assert!(text.contains("3. Capitalize each line"));
        assert!(text.contains("4. Reverse the order of lines"));
        assert!(text.contains("Enter your choice (1-4): "));
    }

    #[test]
    fn end_of_input_cancels_cleanly() {
        let text = run("");
        assert!(text.contains("Operation cancelled by user."));
    }
}
