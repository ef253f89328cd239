//! Error types for the Luhn summarizer.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for summarization operations.
#[derive(Error, Debug)]
pub enum LuhnError {
    /// Input path does not resolve to a readable file.
    #[error("File not found: {0}")]
    InputNotFound(PathBuf),

    /// Input file does not carry an accepted extension.
    #[error("Unsupported file extension: {0} (expected .txt)")]
    UnsupportedExtension(PathBuf),

    /// Input contains no text to summarize.
    #[error("Empty document: {0}")]
    EmptyDocument(String),

    /// Text could not be split into sentences and words.
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// No stop-word list or tokenizer exists for the requested language.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, LuhnError>;

impl From<serde_json::Error> for LuhnError {
    fn from(err: serde_json::Error) -> Self {
        LuhnError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LuhnError::InputNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err = LuhnError::UnsupportedLanguage("de".to_string());
        assert_eq!(err.to_string(), "Unsupported language: de");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LuhnError = io.into();
        assert!(matches!(err, LuhnError::Io(_)));
    }
}
