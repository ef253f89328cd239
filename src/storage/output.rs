//! Writing summaries to disk.

use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix appended to the input file stem for the summary file.
pub const SUMMARY_SUFFIX: &str = "_abstract";

/// Returns the summary path next to `input`: `notes.txt` → `notes_abstract.txt`.
pub fn summary_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, SUMMARY_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, SUMMARY_SUFFIX),
    };
    input.with_file_name(file_name)
}

/// Writes `contents` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory first and
/// replaces `path` only once fully written, so a failure never leaves a
/// partial file behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
