//! The end-to-end summarization pipeline.

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::scoring::SentenceScorer;
use crate::significance::{SignificanceClassifier, SignificantWordSet};
use crate::summary::{Summary, SummarySelector};
use crate::text::{tokenizer_for, Language, StopwordFilter, Tokenizer};
use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

/// A tokenized and scored document with its significant words.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Document with every sentence scored.
    pub document: Document,
    /// Words that counted as significant.
    pub significant: SignificantWordSet,
}

/// Luhn summarizer for one language.
///
/// Holds only immutable configuration and the stop-word list, so one
/// instance can summarize many texts, including from several threads.
pub struct Summarizer {
    config: Config,
    tokenizer: Box<dyn Tokenizer>,
    stopwords: StopwordFilter,
    classifier: SignificanceClassifier,
    scorer: SentenceScorer,
    selector: SummarySelector,
}

impl Summarizer {
    /// Creates a summarizer for `language`.
    ///
    /// Loads the built-in stop-word list plus `config.text.extra_stopwords`.
    pub fn new(config: Config, language: Language) -> Result<Self> {
        config.validate()?;

        let tokenizer = tokenizer_for(language, &config.text);
        let mut stopwords = StopwordFilter::for_language(language);
        stopwords.add_stopwords(&config.text.extra_stopwords);
        debug!("Loaded {} stop words for {}", stopwords.len(), language);

        let summarizer = Self {
            tokenizer,
            classifier: SignificanceClassifier::new(&config.significance),
            scorer: SentenceScorer::new(&config.scoring),
            selector: SummarySelector::new(&config.summary),
            stopwords: StopwordFilter::empty(),
            config,
        };
        Ok(summarizer.with_stopwords(stopwords))
    }

    /// Creates a summarizer for the configured language, detecting it from
    /// `sample` when none is set.
    pub fn for_text(config: Config, sample: &str) -> Result<Self> {
        let language = resolve_language(&config, sample);
        Self::new(config, language)
    }

    /// Replaces the stop-word list.
    ///
    /// When stemming is enabled the list is matched by stem.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = match self.tokenizer.stemmer() {
            Some(stemmer) => stopwords.with_stemmer(*stemmer),
            None => stopwords,
        };
        self
    }

    /// Language this summarizer tokenizes.
    pub fn language(&self) -> Language {
        self.tokenizer.language()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Active stop-word list.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Stop-word list for adding entries after construction.
    pub fn stopwords_mut(&mut self) -> &mut StopwordFilter {
        &mut self.stopwords
    }

    /// Tokenizes `text`.
    pub fn tokenize(&self, text: &str) -> Result<Document> {
        self.tokenizer.tokenize(text)
    }

    /// Classifies and scores an already tokenized document.
    pub fn analyze_document(&self, mut document: Document) -> Analysis {
        let significant = self.classifier.classify(&document, &self.stopwords);
        self.scorer.score(&mut document, &significant);
        Analysis {
            document,
            significant,
        }
    }

    /// Tokenizes, classifies and scores `text`.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        Ok(self.analyze_document(self.tokenize(text)?))
    }

    /// Summarizes `text` using the configured sentence budget.
    ///
    /// A text that yields no sentences gives an empty summary.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        let analysis = self.analyze(text)?;
        Ok(self.selector.summarize(&analysis.document))
    }

    /// Summarizes `text` keeping at most `desired` sentences.
    pub fn summarize_count(&self, text: &str, desired: usize) -> Result<Summary> {
        let analysis = self.analyze(text)?;
        Ok(self.selector.select(&analysis.document, desired))
    }

    /// Splits `text` into line chunks and summarizes each one.
    ///
    /// Chunks are independent documents and are processed in parallel;
    /// summaries come back in input order.
    pub fn summarize_chunks(
        &self,
        text: &str,
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<Summary>> {
        let chunks = split_into_chunks(text, self.config.summary.buffer_lines);
        info!("Summarizing {} chunk(s)", chunks.len());

        if let Some(pb) = progress {
            pb.set_length(chunks.len() as u64);
        }

        chunks
            .par_iter()
            .map(|chunk| {
                let summary = self.summarize(chunk);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                summary
            })
            .collect()
    }

    /// Renders chunk summaries, one line per chunk.
    pub fn render_chunks(&self, summaries: &[Summary]) -> String {
        let separator = self.config.summary.separator.as_str();
        let mut out = String::new();
        for summary in summaries {
            out.push_str(&summary.render(separator));
            out.push('\n');
        }
        out
    }
}

/// Picks the configured language or detects one from the first non-empty
/// line of `sample`.
pub fn resolve_language(config: &Config, sample: &str) -> Language {
    config.text.language.unwrap_or_else(|| {
        let first_line = sample
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("");
        let detected = Language::detect(first_line);
        info!("Detected language: {}", detected);
        detected
    })
}

/// Groups lines into chunks of more than `buffer_lines` lines each.
///
/// A chunk is closed as soon as it holds more than `buffer_lines` line
/// breaks; the remainder forms the last chunk. Blank chunks are dropped.
pub fn split_into_chunks(text: &str, buffer_lines: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut newlines = 0;

    for (pos, _) in text.match_indices('\n') {
        newlines += 1;
        if newlines > buffer_lines {
            chunks.push(&text[start..=pos]);
            start = pos + 1;
            newlines = 0;
        }
    }
    chunks.push(&text[start..]);

    chunks.retain(|chunk| !chunk.trim().is_empty());
    chunks
}
