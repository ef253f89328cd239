//! Clusters of significant words within a sentence.

use crate::significance::SignificantWordSet;

/// A run of words bounded by significant words at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// Index of the first significant word.
    pub start: usize,
    /// Index of the last significant word (inclusive).
    pub end: usize,
    /// Number of significant words inside the cluster.
    pub significant: usize,
}

impl Cluster {
    /// Words spanned from the first to the last significant word.
    #[inline]
    pub fn span(&self) -> usize {
        self.end - self.start + 1
    }

    /// Luhn's cluster weight: significant² / span.
    #[inline]
    pub fn score(&self) -> f64 {
        debug_assert!(self.end >= self.start && self.significant >= 1);
        (self.significant * self.significant) as f64 / self.span() as f64
    }
}

/// Finds the maximal clusters of `words`.
///
/// Consecutive significant words stay in one cluster while at most
/// `max_distance` non-significant words separate them. Clusters holding a
/// single significant word are included.
pub fn find_clusters<S: AsRef<str>>(
    words: &[S],
    significant: &SignificantWordSet,
    max_distance: usize,
) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut current: Option<Cluster> = None;

    for (i, word) in words.iter().enumerate() {
        if !significant.contains(word.as_ref()) {
            continue;
        }

        current = match current {
            Some(mut cluster) if i - cluster.end - 1 <= max_distance => {
                cluster.end = i;
                cluster.significant += 1;
                Some(cluster)
            }
            previous => {
                clusters.extend(previous);
                Some(Cluster {
                    start: i,
                    end: i,
                    significant: 1,
                })
            }
        };
    }

    clusters.extend(current);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::significance::SignificanceClassifier;
    use crate::text::{Language, StopwordFilter};
    use crate::Document;

    /// Builds a set where every listed word is significant.
    fn significant(words: &[&str]) -> SignificantWordSet {
        let repeated: Vec<String> = words.iter().map(|w| format!("{w} {w}")).collect();
        let doc = Document::new(
            Language::English,
            vec![(String::new(), repeated.join(" ").split(' ').map(str::to_string).collect())],
        );
        SignificanceClassifier::default().classify(&doc, &StopwordFilter::empty())
    }

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_single_cluster() {
        let set = significant(&["sat", "mat"]);
        let clusters = find_clusters(&words("the cat sat on the mat"), &set, 4);

        assert_eq!(clusters, vec![Cluster { start: 2, end: 5, significant: 2 }]);
        assert_eq!(clusters[0].span(), 4);
        assert_eq!(clusters[0].score(), 1.0);
    }

    #[test]
    fn test_gap_breaks_cluster() {
        let set = significant(&["a", "b"]);
        // Three filler words between "a" and "b".
        let text = words("a x x x b");

        assert_eq!(find_clusters(&text, &set, 3).len(), 1);

        let clusters = find_clusters(&text, &set, 2);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], Cluster { start: 0, end: 0, significant: 1 });
        assert_eq!(clusters[1], Cluster { start: 4, end: 4, significant: 1 });
    }

    #[test]
    fn test_adjacent_significant_words() {
        let set = significant(&["a"]);
        let clusters = find_clusters(&words("a a a"), &set, 0);

        assert_eq!(clusters, vec![Cluster { start: 0, end: 2, significant: 3 }]);
        assert_eq!(clusters[0].score(), 3.0);
    }

    #[test]
    fn test_luhn_example() {
        // Significant words at 0, 2, 3 and 7: two clusters with distance 2.
        let set = significant(&["s"]);
        let clusters = find_clusters(&words("s x s s x x x s"), &set, 2);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], Cluster { start: 0, end: 3, significant: 3 });
        assert_eq!(clusters[0].score(), 9.0 / 4.0);
        assert_eq!(clusters[1].significant, 1);
    }

    #[test]
    fn test_no_significant_words() {
        let set = significant(&["zzz"]);
        assert!(find_clusters(&words("nothing to see"), &set, 4).is_empty());
        assert!(find_clusters::<&str>(&[], &set, 4).is_empty());
    }
}
