//! Top-scoring sentence selection.

use super::SentenceBudget;
use crate::config::SummaryConfig;
use crate::document::{Document, Sentence};
use std::fmt;

/// Selected sentences in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Selected sentences, ordered by original index.
    pub sentences: Vec<Sentence>,
    /// Number of sentences in the source document.
    pub total_sentences: usize,
}

impl Summary {
    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Checks whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Original indices of the selected sentences.
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Joins the selected sentences with `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" "))
    }
}

/// Picks the highest-scoring sentences of a scored document.
#[derive(Debug, Clone)]
pub struct SummarySelector {
    budget: SentenceBudget,
}

impl Default for SummarySelector {
    fn default() -> Self {
        Self::new(&SummaryConfig::default())
    }
}

impl SummarySelector {
    /// Creates a selector from configuration.
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            budget: config.budget,
        }
    }

    /// Set the sentence budget.
    pub fn with_budget(mut self, budget: SentenceBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Selects sentences according to the configured budget.
    pub fn summarize(&self, document: &Document) -> Summary {
        self.select(
            document,
            self.budget.resolve(document.len(), document.line_count()),
        )
    }

    /// Selects the `desired` best sentences.
    ///
    /// Sentences are ranked by score, ties going to the earlier sentence;
    /// the winners are returned in document order. `desired` is clamped to
    /// the document's sentence count.
    pub fn select(&self, document: &Document, desired: usize) -> Summary {
        let total = document.len();
        let take = desired.min(total);

        let mut ranked: Vec<&Sentence> = document.sentences().iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.index.cmp(&b.index))
        });
        ranked.truncate(take);
        ranked.sort_by_key(|s| s.index);

        Summary {
            sentences: ranked.into_iter().cloned().collect(),
            total_sentences: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Language;

    fn document(scores: &[f64]) -> Document {
        let mut doc = Document::new(
            Language::English,
            scores
                .iter()
                .enumerate()
                .map(|(i, _)| (format!("Sentence {}.", i), vec![format!("w{}", i)])),
        );
        for (sentence, &score) in doc.sentences_mut().iter_mut().zip(scores) {
            sentence.score = score;
        }
        doc
    }

    #[test]
    fn test_top_sentences_in_document_order() {
        let doc = document(&[0.5, 2.0, 0.0, 3.0, 1.0]);
        let summary = SummarySelector::default().select(&doc, 3);

        assert_eq!(summary.indices(), vec![1, 3, 4]);
        assert_eq!(summary.total_sentences, 5);
        assert_eq!(summary.to_string(), "Sentence 1. Sentence 3. Sentence 4.");
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let doc = document(&[1.0, 1.0, 1.0, 1.0]);
        let summary = SummarySelector::default().select(&doc, 2);
        assert_eq!(summary.indices(), vec![0, 1]);
    }

    #[test]
    fn test_desired_count_clamped() {
        let doc = document(&[0.1, 0.2]);
        let summary = SummarySelector::default().select(&doc, 10);
        assert_eq!(summary.indices(), vec![0, 1]);

        let summary = SummarySelector::default().select(&doc, 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let summary = SummarySelector::default().select(&Document::empty(Language::English), 3);
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "");
    }

    #[test]
    fn test_budget() {
        let doc = document(&[0.1, 0.9, 0.2, 0.8, 0.3, 0.7, 0.4, 0.6, 0.5, 0.0]);

        let summary = SummarySelector::default().summarize(&doc);
        assert_eq!(summary.indices(), vec![1, 3, 5]);

        let summary = SummarySelector::default()
            .with_budget(SentenceBudget::Count(1))
            .summarize(&doc);
        assert_eq!(summary.indices(), vec![1]);
    }

    #[test]
    fn test_line_budget_follows_source_lines() {
        // Ten sentences read from three lines keep floor(0.3 * 3) = 0 -> 1.
        let doc = document(&[0.1, 0.9, 0.2, 0.8, 0.3, 0.7, 0.4, 0.6, 0.5, 0.0]).with_line_count(3);

        let summary = SummarySelector::default().summarize(&doc);
        assert_eq!(summary.indices(), vec![1]);

        let summary = SummarySelector::default()
            .with_budget(SentenceBudget::Ratio(0.3))
            .summarize(&doc);
        assert_eq!(summary.indices(), vec![1, 3, 5]);
    }

    #[test]
    fn test_render_separator() {
        let doc = document(&[1.0, 1.0]);
        let summary = SummarySelector::default().select(&doc, 2);
        assert_eq!(summary.render("\n"), "Sentence 0.\nSentence 1.");
    }
}
