//! Small helpers for logging and output paths.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a character
/// boundary) with an ellipsis and the number of dropped bytes appended.
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Resolve `{dir}/{basename}.{extension}`.
pub fn output_path(dir: &Path, basename: &str, extension: &str) -> PathBuf {
    dir.join(format!("{basename}.{extension}"))
}

/// Ensure the output directory exists, creating it (and parents) if needed.
#[instrument(level = "info", skip_all, fields(path = %dir.display()))]
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    info!("Created output directory");
    Ok(())
}
