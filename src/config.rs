//! Configuration for the Luhn summarization pipeline.

use crate::error::{LuhnError, Result};
use crate::significance::FrequencyBound;
use crate::summary::SentenceBudget;
use crate::text::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration for the summarization pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokenization and normalization configuration.
    pub text: TextConfig,

    /// Significant-word classification configuration.
    pub significance: SignificanceConfig,

    /// Sentence scoring configuration.
    pub scoring: ScoringConfig,

    /// Summary selection configuration.
    pub summary: SummaryConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LuhnError::InputNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all values are within their accepted ranges.
    pub fn validate(&self) -> Result<()> {
        self.text.validate()?;
        self.significance.validate()?;
        self.summary.validate()
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Document language. `None` detects it from the text.
    /// Default: None.
    pub language: Option<Language>,

    /// Convert all words to lowercase.
    /// Default: true.
    pub lowercase: bool,

    /// Apply Unicode normalization (NFC) before stripping punctuation.
    /// Default: true.
    pub unicode_normalize: bool,

    /// Minimum word length (in characters) to keep.
    /// Default: 1.
    pub min_token_length: usize,

    /// Maximum word length (in characters) to keep.
    /// Default: 50.
    pub max_token_length: usize,

    /// Drop purely numeric words.
    /// Default: false.
    pub remove_numbers: bool,

    /// Reduce words to their Snowball stem, so that "cat" and "cats"
    /// count as one word. Stop words are stemmed the same way.
    /// Default: false.
    pub stem: bool,

    /// Stop words added on top of the language's built-in list.
    /// Default: empty.
    pub extra_stopwords: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            language: None,
            lowercase: true,
            unicode_normalize: true,
            min_token_length: 1,
            max_token_length: 50,
            remove_numbers: false,
            stem: false,
            extra_stopwords: Vec::new(),
        }
    }
}

impl TextConfig {
    fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(LuhnError::Config(
                "min_token_length must be at least 1".to_string(),
            ));
        }
        if self.max_token_length < self.min_token_length {
            return Err(LuhnError::Config(format!(
                "max_token_length ({}) is smaller than min_token_length ({})",
                self.max_token_length, self.min_token_length
            )));
        }
        Ok(())
    }
}

/// Significant-word classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    /// Minimum occurrence count for a word to be significant (inclusive).
    /// Luhn's low cutoff: words seen once carry no emphasis.
    /// Default: absolute 2.
    pub lower_bound: FrequencyBound,

    /// Maximum occurrence count for a word to be significant (inclusive).
    /// Luhn's high cutoff; very common words are mostly caught by the
    /// stop-word list already.
    /// Default: None (unbounded).
    pub upper_bound: Option<FrequencyBound>,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            lower_bound: FrequencyBound::Absolute(crate::DEFAULT_LOWER_BOUND),
            upper_bound: None,
        }
    }
}

impl SignificanceConfig {
    fn validate(&self) -> Result<()> {
        self.lower_bound.validate()?;
        if let Some(upper) = &self.upper_bound {
            upper.validate()?;
            if let (FrequencyBound::Absolute(lo), FrequencyBound::Absolute(hi)) =
                (&self.lower_bound, upper)
            {
                if hi < lo {
                    return Err(LuhnError::Config(format!(
                        "upper_bound ({}) is smaller than lower_bound ({})",
                        hi, lo
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Sentence scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum number of non-significant words allowed between two
    /// significant words of the same cluster.
    /// Default: 4 (Luhn 1957).
    pub max_word_distance: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_word_distance: crate::DEFAULT_MAX_WORD_DISTANCE,
        }
    }
}

/// Summary selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// How many sentences each summary keeps.
    /// Default: 0.3 of the chunk's lines, at least one sentence.
    pub budget: SentenceBudget,

    /// Input lines accumulated before a chunk is summarized on its own.
    /// Default: 1000.
    pub buffer_lines: usize,

    /// Separator placed between selected sentences.
    /// Default: a single space.
    pub separator: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            budget: SentenceBudget::LineRatio(crate::DEFAULT_SUMMARY_RATIO),
            buffer_lines: 1000,
            separator: " ".to_string(),
        }
    }
}

impl SummaryConfig {
    fn validate(&self) -> Result<()> {
        self.budget.validate()?;
        if self.buffer_lines == 0 {
            return Err(LuhnError::Config(
                "buffer_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.significance.lower_bound, FrequencyBound::Absolute(2));
        assert_eq!(config.significance.upper_bound, None);
        assert_eq!(config.scoring.max_word_distance, 4);
        assert_eq!(config.summary.buffer_lines, 1000);
        assert_eq!(config.summary.budget, SentenceBudget::LineRatio(0.3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bounds() {
        let mut config = Config::default();
        config.significance.lower_bound = FrequencyBound::Absolute(5);
        config.significance.upper_bound = Some(FrequencyBound::Absolute(3));
        assert!(matches!(config.validate(), Err(LuhnError::Config(_))));
    }

    #[test]
    fn test_invalid_token_lengths() {
        let mut config = Config::default();
        config.text.min_token_length = 10;
        config.text.max_token_length = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"scoring": {{"max_word_distance": 2}}, "text": {{"language": "ru"}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.scoring.max_word_distance, 2);
        assert_eq!(config.text.language, Some(Language::Russian));
        assert_eq!(config.significance, SignificanceConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::from_file("/nonexistent/luhn.json");
        assert!(matches!(result, Err(LuhnError::InputNotFound(_))));
    }
}
