//! Parsed documents and their sentences.

use crate::text::Language;

/// A sentence with its original text, normalized words, and score.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the document (0-based).
    pub index: usize,
    /// Original sentence text, whitespace-normalized.
    pub text: String,
    /// Normalized words in reading order.
    pub words: Vec<String>,
    /// Significance score assigned by the scorer.
    pub score: f64,
}

impl Sentence {
    /// Creates an unscored sentence.
    pub fn new(index: usize, text: String, words: Vec<String>) -> Self {
        Self {
            index,
            text,
            words,
            score: 0.0,
        }
    }

    /// Number of words in the sentence.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether the sentence has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An ordered sequence of sentences parsed from one text.
///
/// Sentence indices are unique and follow textual order. Only scores change
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    language: Language,
    sentences: Vec<Sentence>,
    lines: usize,
}

impl Document {
    /// Builds a document from `(text, words)` pairs in reading order.
    ///
    /// The line count starts out as one line per sentence.
    pub fn new<I>(language: Language, sentences: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .enumerate()
            .map(|(index, (text, words))| Sentence::new(index, text, words))
            .collect();

        Self {
            language,
            lines: sentences.len(),
            sentences,
        }
    }

    /// Creates a document without sentences.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            sentences: Vec::new(),
            lines: 0,
        }
    }

    /// Set the number of source text lines the document was read from.
    pub fn with_line_count(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Number of source text lines.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Language the document was tokenized with.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Sentences in document order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub(crate) fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Checks whether the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of words across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Iterates over every word in document order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.words.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_indices_follow_order() {
        let doc = Document::new(
            Language::English,
            vec![
                ("One two.".to_string(), words("one two")),
                ("Three.".to_string(), words("three")),
            ],
        );

        assert_eq!(doc.len(), 2);
        for (i, sentence) in doc.sentences().iter().enumerate() {
            assert_eq!(sentence.index, i);
            assert_eq!(sentence.score, 0.0);
        }
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.words().collect::<Vec<_>>(), vec!["one", "two", "three"]);
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.with_line_count(7).line_count(), 7);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::empty(Language::Russian);
        assert!(doc.is_empty());
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.language(), Language::Russian);
    }
}
