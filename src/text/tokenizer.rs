//! Language-specific tokenizers producing sentences of normalized words.

use crate::config::TextConfig;
use crate::document::Document;
use crate::error::{LuhnError, Result};
use crate::segmentation::SentenceSplitter;
use crate::text::{Language, Normalizer, WordStemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into a [`Document`].
///
/// Implementations supply sentence splitting and word normalization for
/// one language; the provided methods assemble them.
pub trait Tokenizer: Send + Sync {
    /// Language this tokenizer handles.
    fn language(&self) -> Language;

    /// Splits text into sentence strings.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Normalizer applied to every word.
    fn normalizer(&self) -> &Normalizer;

    /// Stemmer applied after normalization, if stemming is enabled.
    fn stemmer(&self) -> Option<&WordStemmer>;

    /// Stems a normalized word when stemming is enabled.
    fn stem(&self, word: String) -> String {
        match self.stemmer() {
            Some(stemmer) => stemmer.stem(&word),
            None => word,
        }
    }

    /// Splits one sentence into normalized words.
    fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter_map(|word| self.normalizer().normalize_token(word))
            .map(|word| self.stem(word))
            .collect()
    }

    /// Tokenizes text into a document.
    ///
    /// Sentences that keep no words after normalization are dropped.
    /// Returns [`LuhnError::Tokenization`] for empty or blank input.
    fn tokenize(&self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(LuhnError::Tokenization("input text is empty".to_string()));
        }

        let sentences = self
            .split_sentences(text)
            .into_iter()
            .filter_map(|sentence| {
                let words = self.tokenize_words(&sentence);
                if words.is_empty() {
                    None
                } else {
                    Some((sentence, words))
                }
            });

        Ok(Document::new(self.language(), sentences).with_line_count(text.lines().count()))
    }
}

/// Tokenizer for English text.
#[derive(Debug, Clone)]
pub struct EnglishTokenizer {
    splitter: SentenceSplitter,
    normalizer: Normalizer,
    stemmer: Option<WordStemmer>,
}

impl EnglishTokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            splitter: SentenceSplitter::for_language(Language::English),
            stemmer: config.stem.then(|| WordStemmer::new(Language::English)),
            normalizer: Normalizer::new(config),
        }
    }
}

impl Tokenizer for EnglishTokenizer {
    fn language(&self) -> Language {
        Language::English
    }

    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.splitter.split(text)
    }

    fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn stemmer(&self) -> Option<&WordStemmer> {
        self.stemmer.as_ref()
    }
}

/// Tokenizer for Russian text.
#[derive(Debug, Clone)]
pub struct RussianTokenizer {
    splitter: SentenceSplitter,
    normalizer: Normalizer,
    stemmer: Option<WordStemmer>,
}

impl RussianTokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            splitter: SentenceSplitter::for_language(Language::Russian),
            stemmer: config.stem.then(|| WordStemmer::new(Language::Russian)),
            normalizer: Normalizer::new(config),
        }
    }
}

impl Tokenizer for RussianTokenizer {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.splitter.split(text)
    }

    fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn stemmer(&self) -> Option<&WordStemmer> {
        self.stemmer.as_ref()
    }

    fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        // "ё" and "е" are used interchangeably in print.
        sentence
            .unicode_words()
            .filter_map(|word| self.normalizer.normalize_token(word))
            .map(|word| self.stem(word.replace('ё', "е")))
            .collect()
    }
}

/// Returns the tokenizer for `language`.
pub fn tokenizer_for(language: Language, config: &TextConfig) -> Box<dyn Tokenizer> {
    match language {
        Language::English => Box::new(EnglishTokenizer::new(config.clone())),
        Language::Russian => Box::new(RussianTokenizer::new(config.clone())),
    }
}
