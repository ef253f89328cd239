//! Reading documents from disk.

use crate::error::{LuhnError, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// File extensions accepted as input documents.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt"];

/// Checks whether `path` carries an accepted extension.
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Reads a text document.
///
/// Fails with [`LuhnError::InputNotFound`] when the path is not a file,
/// [`LuhnError::UnsupportedExtension`] for non-`.txt` paths, and
/// [`LuhnError::EmptyDocument`] when the file holds only whitespace.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(LuhnError::InputNotFound(path.to_path_buf()));
    }
    if !has_allowed_extension(path) {
        return Err(LuhnError::UnsupportedExtension(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = decode(bytes);

    if text.trim().is_empty() {
        return Err(LuhnError::EmptyDocument(path.display().to_string()));
    }

    Ok(text)
}

/// Decodes bytes as UTF-8, falling back to Latin-1.
///
/// A leading byte-order mark is dropped.
pub fn decode(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "Input is not valid UTF-8 (at byte {}), decoding as Latin-1",
                err.utf8_error().valid_up_to()
            );
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    };

    match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
