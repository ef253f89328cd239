//! Supported document languages and script-based detection.

use crate::error::LuhnError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language with stop-word and tokenization support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Russian.
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Guesses the language of `text` from the scripts of its letters.
    ///
    /// Text whose letters are mostly Cyrillic is Russian; everything else,
    /// including text without letters, falls back to English.
    pub fn detect(text: &str) -> Language {
        let mut letters = 0usize;
        let mut cyrillic = 0usize;

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            letters += 1;
            if is_cyrillic(c) {
                cyrillic += 1;
            }
        }

        if letters > 0 && cyrillic * 2 > letters {
            Language::Russian
        } else {
            Language::English
        }
    }
}

#[inline]
fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}')
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            other => Err(LuhnError::UnsupportedLanguage(other.to_string())),
        }
    }
}
