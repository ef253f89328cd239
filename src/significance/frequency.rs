//! Document-wide word frequency counts.

use crate::document::Document;
use rustc_hash::FxHashMap;

/// Occurrence counts of normalized words across one document.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, usize>,
    total_words: usize,
}

impl WordFrequencyTable {
    /// Counts every word of `document`.
    pub fn from_document(document: &Document) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total_words = 0;

        for word in document.words() {
            *counts.entry(word.to_string()).or_insert(0) += 1;
            total_words += 1;
        }

        Self {
            counts,
            total_words,
        }
    }

    /// Occurrence count of `word` (0 if absent).
    #[inline]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Checks whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Iterates over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Returns the `k` most frequent words, ties broken alphabetically.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted.truncate(k);
        sorted
    }
}
