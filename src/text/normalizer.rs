//! Word normalization for significance counting.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Word normalizer that case-folds and strips punctuation.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Normalizes a single word.
    ///
    /// Returns `None` if nothing remains or the word should be filtered out.
    pub fn normalize_token(&self, token: &str) -> Option<String> {
        // NFC keeps letters like "й" as one code point so that stripping
        // non-alphanumerics does not tear off combining marks.
        let mut result: String = if self.config.unicode_normalize {
            token.nfc().collect()
        } else {
            token.to_string()
        };

        if self.config.lowercase {
            result = result.to_lowercase();
        }

        result.retain(|c| c.is_alphanumeric());

        if result.is_empty() {
            return None;
        }

        if self.config.remove_numbers && result.chars().all(|c| c.is_numeric()) {
            return None;
        }

        let len = result.chars().count();
        if len < self.config.min_token_length || len > self.config.max_token_length {
            return None;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::new(TextConfig::default());
        assert_eq!(normalizer.normalize_token("HELLO"), Some("hello".to_string()));
    }

    #[test]
    fn test_strip_punctuation() {
        let normalizer = Normalizer::new(TextConfig::default());
        assert_eq!(normalizer.normalize_token("hello,"), Some("hello".to_string()));
        assert_eq!(normalizer.normalize_token("«мир»"), Some("мир".to_string()));
        assert_eq!(normalizer.normalize_token("don't"), Some("dont".to_string()));
        assert_eq!(normalizer.normalize_token("—"), None);
    }

    #[test]
    fn test_single_letter_words_kept() {
        let normalizer = Normalizer::new(TextConfig::default());
        assert_eq!(normalizer.normalize_token("a"), Some("a".to_string()));
    }

    #[test]
    fn test_min_length_filter() {
        let mut config = TextConfig::default();
        config.min_token_length = 3;
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize_token("ab"), None);
        assert_eq!(normalizer.normalize_token("abc"), Some("abc".to_string()));
    }

    #[test]
    fn test_decomposed_cyrillic() {
        let normalizer = Normalizer::new(TextConfig::default());
        // "й" written as "и" + combining breve
        let decomposed = "мои\u{0306}";
        assert_eq!(normalizer.normalize_token(decomposed), Some("мой".to_string()));
    }

    #[test]
    fn test_remove_numbers() {
        let mut config = TextConfig::default();
        config.remove_numbers = true;
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize_token("123"), None);
        assert_eq!(normalizer.normalize_token("abc"), Some("abc".to_string()));
        assert_eq!(normalizer.normalize_token("abc123"), Some("abc123".to_string()));
    }
}
