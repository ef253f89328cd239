//! Sentence scoring by significant-word clusters.

use super::cluster::{find_clusters, Cluster};
use crate::config::ScoringConfig;
use crate::document::Document;
use crate::significance::SignificantWordSet;
use log::debug;

/// Smallest number of significant words a cluster needs to score.
const MIN_CLUSTER_WORDS: usize = 2;

/// Assigns each sentence the weight of its densest cluster.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    max_word_distance: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl SentenceScorer {
    /// Creates a scorer from configuration.
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            max_word_distance: config.max_word_distance,
        }
    }

    /// Set the maximum gap between significant words of one cluster.
    pub fn with_max_word_distance(mut self, distance: usize) -> Self {
        self.max_word_distance = distance;
        self
    }

    /// Clusters of `words` that hold enough significant words to score.
    pub fn clusters<S: AsRef<str>>(
        &self,
        words: &[S],
        significant: &SignificantWordSet,
    ) -> Vec<Cluster> {
        find_clusters(words, significant, self.max_word_distance)
            .into_iter()
            .filter(|c| c.significant >= MIN_CLUSTER_WORDS)
            .collect()
    }

    /// Scores one sentence.
    ///
    /// Returns the highest cluster score, or 0 when no cluster holds at least
    /// two significant words.
    pub fn score_words<S: AsRef<str>>(&self, words: &[S], significant: &SignificantWordSet) -> f64 {
        self.clusters(words, significant)
            .iter()
            .map(Cluster::score)
            .fold(0.0, f64::max)
    }

    /// Scores every sentence of `document` in place.
    pub fn score(&self, document: &mut Document, significant: &SignificantWordSet) {
        let mut scored = 0;
        for sentence in document.sentences_mut() {
            sentence.score = self.score_words(&sentence.words, significant);
            if sentence.score > 0.0 {
                scored += 1;
            }
        }

        debug!(
            "{} of {} sentences hold a significant cluster",
            scored,
            document.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextConfig;
    use crate::significance::SignificanceClassifier;
    use crate::text::{EnglishTokenizer, StopwordFilter, Tokenizer};

    fn scored(text: &str, stopwords: &[&str], distance: usize) -> Document {
        let mut doc = EnglishTokenizer::new(TextConfig::default())
            .tokenize(text)
            .unwrap();
        let set = SignificanceClassifier::default()
            .classify(&doc, &StopwordFilter::from_list(stopwords));
        SentenceScorer::default()
            .with_max_word_distance(distance)
            .score(&mut doc, &set);
        doc
    }

    #[test]
    fn test_pets_scenario() {
        let doc = scored(
            "The cat sat on the mat. The dog sat on the mat. Cats and dogs are pets.",
            &["the", "on", "and", "are"],
            4,
        );
        let scores: Vec<f64> = doc.sentences().iter().map(|s| s.score).collect();

        // "sat on the mat": 2 significant words over a span of 4.
        assert_eq!(scores, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_single_significant_word_scores_zero() {
        let doc = scored("Apple pie. Apple tart.", &[], 4);
        assert_eq!(doc.sentences()[0].score, 0.0);
        assert_eq!(doc.sentences()[1].score, 0.0);
    }

    #[test]
    fn test_distance_breaks_cluster() {
        let text = "Alpha one two three beta. Alpha beta.";
        let wide = scored(text, &[], 4);
        let narrow = scored(text, &[], 2);

        assert_eq!(wide.sentences()[0].score, 4.0 / 5.0);
        assert_eq!(narrow.sentences()[0].score, 0.0);
        assert_eq!(narrow.sentences()[1].score, 2.0);
    }

    #[test]
    fn test_best_cluster_wins() {
        let scorer = SentenceScorer::default().with_max_word_distance(1);
        let set = SignificanceClassifier::default().classify(
            &EnglishTokenizer::new(TextConfig::default())
                .tokenize("k k")
                .unwrap(),
            &StopwordFilter::empty(),
        );

        // Clusters: "k x k" (4/3) and "k k k" (9/3).
        let words = ["k", "x", "k", "x", "x", "k", "k", "k"];
        assert_eq!(scorer.clusters(&words, &set).len(), 2);
        assert_eq!(scorer.score_words(&words, &set), 3.0);
    }

    #[test]
    fn test_empty_document() {
        let mut doc = Document::empty(crate::text::Language::English);
        SentenceScorer::default().score(&mut doc, &SignificantWordSet::default());
        assert!(doc.is_empty());
    }
}
