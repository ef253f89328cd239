//! Luhn sentence scoring.
//!
//! A sentence is worth as much as its densest cluster of significant words:
//! the squared number of significant words divided by the words the cluster
//! spans.

mod cluster;
mod scorer;

pub use cluster::{find_clusters, Cluster};
pub use scorer::SentenceScorer;
