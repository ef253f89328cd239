//! Significant-word selection by frequency band and stop-word filtering.

mod bounds;
mod classifier;
mod frequency;

pub use bounds::FrequencyBound;
pub use classifier::{SignificanceClassifier, SignificantWordSet};
pub use frequency::WordFrequencyTable;
