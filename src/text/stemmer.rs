//! Snowball stemming.

use crate::text::Language;
use rust_stemmers::{Algorithm, Stemmer};

/// Reduces normalized words to their Snowball stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStemmer {
    language: Language,
}

impl WordStemmer {
    /// Creates a stemmer for `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Stems one lowercase word.
    pub fn stem(&self, word: &str) -> String {
        let algorithm = match self.language {
            Language::English => Algorithm::English,
            Language::Russian => Algorithm::Russian,
        };
        Stemmer::create(algorithm).stem(word).into_owned()
    }
}
