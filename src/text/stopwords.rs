//! Stop-word lists.
//!
//! Built-in lists come from the `stop-words` crate. A filter is loaded once
//! per summarizer and handed to the significance classifier by reference.

use crate::error::Result;
use crate::text::{Language, WordStemmer};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use stop_words::{get, LANGUAGE};
use unicode_normalization::UnicodeNormalization;

/// A set of words excluded from significance regardless of frequency.
///
/// Entries are stored in the same canonical form the tokenizer produces
/// (NFC, lowercase, alphanumerics only), so `"don't"` matches `"dont"`.
/// With a stemmer attached, lookups match the stems of the entries.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
    stemmer: Option<WordStemmer>,
    stems: FxHashSet<String>,
}

impl StopwordFilter {
    /// Loads the built-in stop-word list for `language`.
    pub fn for_language(language: Language) -> Self {
        let lang = match language {
            Language::English => LANGUAGE::English,
            Language::Russian => LANGUAGE::Russian,
        };
        let mut filter = Self::empty();
        for word in get(lang).iter() {
            filter.insert(word);
            // The Russian tokenizer folds "ё" into "е".
            if language == Language::Russian && word.contains('ё') {
                filter.insert(&word.replace('ё', "е"));
            }
        }
        filter
    }

    /// Creates an empty stop-word filter (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a stop-word filter from a custom list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Reads additional stop words from a file, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        let before = self.len();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.insert(line);
        }
        Ok(self.len() - before)
    }

    /// Adds additional stop words to the filter.
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Matches stemmed words from now on, including entries added later.
    pub fn with_stemmer(mut self, stemmer: WordStemmer) -> Self {
        self.stems = self.stopwords.iter().map(|w| stemmer.stem(w)).collect();
        self.stemmer = Some(stemmer);
        self
    }

    /// Checks whether a normalized (and, with a stemmer, stemmed) word is a
    /// stop word.
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stemmer.is_some() {
            self.stems.contains(word)
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Number of stop words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Checks whether the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn insert(&mut self, word: &str) {
        if let Some(canonical) = canonical(word) {
            if let Some(stemmer) = &self.stemmer {
                self.stems.insert(stemmer.stem(&canonical));
            }
            self.stopwords.insert(canonical);
        }
    }
}

fn canonical(word: &str) -> Option<String> {
    let mut result: String = word.nfc().collect::<String>().to_lowercase();
    result.retain(|c| c.is_alphanumeric());
    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::for_language(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summary"));
        assert!(!filter.is_stopword("luhn"));
    }

    #[test]
    fn test_russian_stopwords() {
        let filter = StopwordFilter::for_language(Language::Russian);

        assert!(filter.is_stopword("и"));
        assert!(filter.is_stopword("в"));
        assert!(!filter.is_stopword("реферат"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_stemmed_lookup() {
        let mut filter = StopwordFilter::from_list(&["Running"])
            .with_stemmer(WordStemmer::new(Language::English));
        assert!(filter.is_stopword("run"));
        assert!(!filter.is_stopword("running"));

        // Entries added after the stemmer is attached are stemmed too.
        filter.add_stopwords(&["cats"]);
        assert!(filter.is_stopword("cat"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_apostrophes_canonicalized() {
        let filter = StopwordFilter::from_list(&["don't", "-"]);
        assert!(filter.is_stopword("dont"));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# domain words").unwrap();
        writeln!(file, "figure").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Table  ").unwrap();

        let mut filter = StopwordFilter::empty();
        let added = filter.extend_from_file(file.path()).unwrap();

        assert_eq!(added, 2);
        assert!(filter.is_stopword("figure"));
        assert!(filter.is_stopword("table"));
    }
}
