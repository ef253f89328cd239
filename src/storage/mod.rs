//! Document input and summary output on disk.

mod input;
mod output;

pub use input::{decode, has_allowed_extension, read_document, ALLOWED_EXTENSIONS};
pub use output::{summary_path, write_atomic, SUMMARY_SUFFIX};
