//! Sentence segmentation.
//!
//! Splits raw text into sentences with punctuation rules and per-language
//! abbreviation lists.

pub mod sentence;

pub use sentence::{split_sentences, SentenceSplitter};
