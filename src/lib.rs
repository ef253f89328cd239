//! # Luhn - Extractive Text Summarization
//!
//! An implementation of H. P. Luhn's automatic abstracting method (1957).
//! Sentences are ranked by how densely they pack the document's
//! *significant* words, and the best of them are returned in their
//! original order.
//!
//! ## Overview
//!
//! A word is significant when it is not a stop word and its frequency in
//! the document falls inside a configured band. Inside each sentence,
//! significant words that sit close together form clusters; a cluster with
//! `n` significant words spanning `w` words weighs `n² / w`, and a sentence
//! is worth its heaviest cluster.
//!
//! ## Quick Start
//!
//! ```rust
//! use luhn::{Config, Language, Summarizer};
//!
//! let summarizer = Summarizer::new(Config::default(), Language::English)?;
//! let text = "Rust is a systems language. Rust programs are fast. \
//!             The weather was nice. Fast Rust programs are safe too.";
//! let summary = summarizer.summarize_count(text, 2)?;
//! assert_eq!(summary.len(), 2);
//! # Ok::<(), luhn::LuhnError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Languages, normalization, stop words and tokenizers
//! - [`segmentation`] - Rule-based sentence splitting
//! - [`significance`] - Word frequencies and significant-word selection
//! - [`scoring`] - Cluster search and sentence scores
//! - [`summary`] - Sentence selection and rendering
//! - [`pipeline`] - The assembled [`Summarizer`]
//! - [`storage`] - Reading documents and writing summaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod segmentation;
pub mod significance;
pub mod storage;
pub mod summary;
pub mod text;

// Re-export commonly used types
pub use config::{Config, ScoringConfig, SignificanceConfig, SummaryConfig, TextConfig};
pub use document::{Document, Sentence};
pub use error::{LuhnError, Result};
pub use pipeline::{Analysis, Summarizer};
pub use scoring::{Cluster, SentenceScorer};
pub use significance::{FrequencyBound, SignificanceClassifier, SignificantWordSet, WordFrequencyTable};
pub use summary::{SentenceBudget, Summary, SummarySelector};
pub use text::{Language, Normalizer, StopwordFilter, Tokenizer, WordStemmer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default lower frequency bound for significant words.
pub const DEFAULT_LOWER_BOUND: usize = 2;

/// Default cluster gap, in non-significant words.
pub const DEFAULT_MAX_WORD_DISTANCE: usize = 4;

/// Default share of input lines turned into summary sentences.
pub const DEFAULT_SUMMARY_RATIO: f64 = 0.3;
