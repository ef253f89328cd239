//! Significant-word classification.

use super::{FrequencyBound, WordFrequencyTable};
use crate::config::SignificanceConfig;
use crate::document::Document;
use crate::text::StopwordFilter;
use log::debug;
use rustc_hash::FxHashSet;

/// Words that count as significant within one document.
///
/// Every member is outside the stop-word list and occurs within the
/// resolved frequency band.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignificantWordSet {
    words: FxHashSet<String>,
}

impl SignificantWordSet {
    /// Checks whether `word` is significant.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of significant words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether no word is significant.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the words sorted alphabetically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

/// Decides which words of a document are significant.
#[derive(Debug, Clone)]
pub struct SignificanceClassifier {
    lower_bound: FrequencyBound,
    upper_bound: Option<FrequencyBound>,
}

impl Default for SignificanceClassifier {
    fn default() -> Self {
        Self::new(&SignificanceConfig::default())
    }
}

impl SignificanceClassifier {
    /// Creates a classifier from configuration.
    pub fn new(config: &SignificanceConfig) -> Self {
        Self {
            lower_bound: config.lower_bound,
            upper_bound: config.upper_bound,
        }
    }

    /// Set the lower frequency bound.
    pub fn with_lower_bound(mut self, bound: FrequencyBound) -> Self {
        self.lower_bound = bound;
        self
    }

    /// Set the upper frequency bound.
    pub fn with_upper_bound(mut self, bound: Option<FrequencyBound>) -> Self {
        self.upper_bound = bound;
        self
    }

    /// Classifies the words of `document`.
    pub fn classify(&self, document: &Document, stopwords: &StopwordFilter) -> SignificantWordSet {
        let table = WordFrequencyTable::from_document(document);
        self.classify_table(&table, stopwords)
    }

    /// Classifies words from a prebuilt frequency table.
    pub fn classify_table(
        &self,
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
    ) -> SignificantWordSet {
        let total = table.total_words();
        let lower = self.lower_bound.resolve(total);
        let upper = self
            .upper_bound
            .map_or(usize::MAX, |bound| bound.resolve(total));

        let words: FxHashSet<String> = table
            .iter()
            .filter(|&(word, count)| {
                count >= lower && count <= upper && !stopwords.is_stopword(word)
            })
            .map(|(word, _)| word.to_string())
            .collect();

        debug!(
            "{} of {} distinct words significant (band {}..={})",
            words.len(),
            table.len(),
            lower,
            upper
        );

        SignificantWordSet { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextConfig;
    use crate::text::{EnglishTokenizer, Tokenizer};

    fn tokenize(text: &str) -> Document {
        EnglishTokenizer::new(TextConfig::default()).tokenize(text).unwrap()
    }

    fn pets() -> Document {
        tokenize("The cat sat on the mat. The dog sat on the mat. Cats and dogs are pets.")
    }

    fn pet_stopwords() -> StopwordFilter {
        StopwordFilter::from_list(&["the", "on", "and", "are"])
    }

    #[test]
    fn test_pets_scenario() {
        let set = SignificanceClassifier::default().classify(&pets(), &pet_stopwords());
        assert_eq!(set.sorted(), vec!["mat", "sat"]);
    }

    #[test]
    fn test_stopwords_never_significant() {
        let set = SignificanceClassifier::default().classify(&pets(), &StopwordFilter::empty());
        assert!(set.contains("the"));

        let set = SignificanceClassifier::default().classify(&pets(), &pet_stopwords());
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_upper_bound() {
        let classifier = SignificanceClassifier::default()
            .with_lower_bound(FrequencyBound::Absolute(1))
            .with_upper_bound(Some(FrequencyBound::Absolute(1)));
        let set = classifier.classify(&pets(), &pet_stopwords());

        assert!(set.contains("cat"));
        assert!(set.contains("pets"));
        assert!(!set.contains("sat"));
    }

    #[test]
    fn test_relative_bound() {
        // 17 words; 10% rounds up to 2 occurrences.
        let classifier =
            SignificanceClassifier::default().with_lower_bound(FrequencyBound::Relative(0.1));
        let set = classifier.classify(&pets(), &pet_stopwords());
        assert_eq!(set.sorted(), vec!["mat", "sat"]);
    }

    #[test]
    fn test_lower_bound_monotonic() {
        let doc = tokenize(
            "Rust is fast. Rust is safe. Rust compiles code. Code runs fast. \
             Safe code is good code.",
        );
        let stopwords = StopwordFilter::from_list(&["is"]);

        let mut previous = usize::MAX;
        for lower in 0..6 {
            let set = SignificanceClassifier::default()
                .with_lower_bound(FrequencyBound::Absolute(lower))
                .classify(&doc, &stopwords);
            assert!(set.len() <= previous);
            previous = set.len();
        }
    }

    #[test]
    fn test_deterministic() {
        let a = SignificanceClassifier::default().classify(&pets(), &pet_stopwords());
        let b = SignificanceClassifier::default().classify(&pets(), &pet_stopwords());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_document() {
        let set = SignificanceClassifier::default().classify(
            &Document::empty(crate::text::Language::English),
            &StopwordFilter::empty(),
        );
        assert!(set.is_empty());
    }
}
