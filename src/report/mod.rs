//! Human-readable reporting: file information and content statistics.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local, Utc};

use crate::ports::filesystem::FileSystem;

/// Size units for the human-readable formatter, smallest first.
pub const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count using the largest unit that keeps the value at or
/// below 1024, with two decimal places.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
#[must_use]
pub fn format_mtime(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Line, word, and character counts for a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    /// Number of lines (newline count plus one; zero for empty content).
    pub lines: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of characters (not bytes).
    pub chars: usize,
}

impl ContentStats {
    /// Computes statistics for the given content.
    #[must_use]
    pub fn of(content: &str) -> Self {
        let lines = if content.is_empty() { 0 } else { content.matches('\n').count() + 1 };
        Self { lines, words: content.split_whitespace().count(), chars: content.chars().count() }
    }
}

/// Prints the file information block: name, size, mtime, and full path.
///
/// On a stat failure a single diagnostic line is printed and nothing else;
/// the caller's flow continues either way.
///
/// # Errors
///
/// Returns an error string only when writing to `out` fails.
pub fn write_file_info<W: Write>(
    fs: &dyn FileSystem,
    path: &Path,
    out: &mut W,
) -> Result<(), String> {
    let meta = match fs.metadata(path) {
        Ok(meta) => meta,
        Err(e) => {
            writeln!(out, "Error retrieving file information: {e}")
                .map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
    };

    let filename = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let full_path = fs.absolute(path).unwrap_or_else(|_| path.display().to_string());

    writeln!(out, "\nFile Information:").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Filename: {filename}").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Size: {} ({} bytes)", human_size(meta.size), meta.size)
        .map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Last modified: {}", format_mtime(meta.modified))
        .map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Full path: {full_path}").map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

/// Prints the content statistics block, including the elapsed read time in
/// seconds with four decimal places.
///
/// # Errors
///
/// Returns an error string only when writing to `out` fails.
pub fn write_stats<W: Write>(
    stats: ContentStats,
    elapsed_seconds: f64,
    out: &mut W,
) -> Result<(), String> {
    writeln!(out, "\nFile Content Statistics:").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Lines: {}", stats.lines).map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Words: {}", stats.words).map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Characters: {}", stats.chars).map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "Read time: {elapsed_seconds:.4} seconds")
        .map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;

    #[test]
    fn small_sizes_stay_in_bytes() {
        assert_eq!(human_size(0), "0.00 B");
        assert_eq!(human_size(512), "512.00 B");
        assert_eq!(human_size(1024), "1024.00 B");
    }

    #[test]
    fn sizes_promote_to_the_largest_fitting_unit() {
        assert_eq!(human_size(2048), "2.00 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn huge_sizes_cap_at_the_last_unit() {
        let two_pb = 2_u64 * 1024 * 1024 * 1024 * 1024 * 1024;
        assert_eq!(human_size(two_pb), "2048.00 TB");
    }

    #[test]
    fn stats_for_empty_content_are_all_zero() {
        assert_eq!(ContentStats::of(""), ContentStats { lines: 0, words: 0, chars: 0 });
    }

    #[test]
    fn stats_count_lines_words_and_characters() {
        let stats = ContentStats::of("Hello world\nsecond line");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.chars, 23);
    }

    #[test]
    fn character_count_is_not_byte_count() {
        let stats = ContentStats::of("héllo");
        assert_eq!(stats.chars, 5);
    }

    #[test]
    fn trailing_newline_counts_as_an_extra_line() {
        assert_eq!(ContentStats::of("one\ntwo\n").lines, 3);
    }

    #[test]
    fn file_info_block_lists_name_size_and_path() {
        let dir = std::env::temp_dir().join("filelab_report_info_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("info.txt");
        std::fs::write(&path, "twelve bytes").unwrap();

        let mut out = Vec::new();
        write_file_info(&LiveFileSystem, &path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("File Information:"));
        assert!(text.contains("Filename: info.txt"));
        assert!(text.contains("Size: 12.00 B (12 bytes)"));
        assert!(text.contains("Last modified: "));
        assert!(text.contains("Full path: "));
        assert!(text.contains("info.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_info_failure_prints_a_single_diagnostic() {
        let mut out = Vec::new();
        write_file_info(&LiveFileSystem, Path::new("/filelab_report_missing.txt"), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error retrieving file information:"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn stats_block_formats_read_time_to_four_decimals() {
        let mut out = Vec::new();
        write_stats(ContentStats::of("a b\nc"), 0.1234567, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Lines: 2"));
        assert!(text.contains("Words: 3"));
        assert!(text.contains("Characters: 5"));
        assert!(text.contains("Read time: 0.1235 seconds"));
    }
}
