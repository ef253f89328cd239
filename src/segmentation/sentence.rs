//! Rule-based sentence segmentation.
//!
//! Sentence boundaries are found with a protect-split-repair pass: dots that
//! do not end a sentence (abbreviations, initials, decimals, suspension
//! points) are first masked with private-use placeholders, the masked text is
//! cut after terminal punctuation, and the placeholders are then restored.

use crate::text::Language;
use log::warn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Placeholders for protected patterns. Private-use code points never occur
/// in ordinary prose and keep the scan char-based.
mod placeholder {
    /// A dot that must not end a sentence.
    pub const DOT: char = '\u{E000}';
    /// Three or more consecutive dots.
    pub const ELLIPSIS: char = '\u{E001}';
}

/// Abbreviations that never end an English sentence.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "e.g.", "i.e.", "fig.",
    "mt.", "gen.", "col.", "capt.", "lt.", "sgt.", "rev.", "approx.", "dept.", "est.",
];

/// English abbreviations that end a sentence when a capitalized word follows.
const ENGLISH_TRAILING_ABBREVIATIONS: &[&str] = &["etc.", "inc.", "ltd.", "co."];

/// Abbreviations that never end a Russian sentence.
const RUSSIAN_ABBREVIATIONS: &[&str] = &[
    "т.е.", "т.к.", "т.н.", "т.ч.", "гг.", "им.", "см.", "стр.", "ул.", "пер.", "тыс.", "млн.",
    "млрд.", "руб.", "коп.", "проф.", "акад.", "доц.", "напр.", "рис.", "табл.", "гл.", "ср.",
];

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").unwrap());

static COMPOSITE_ABBREV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?P<comp>et al)\.").unwrap());

static FLOAT_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<number>[0-9]+)\.(?P<decimal>[0-9]+)").unwrap());

static LEADING_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<space>\s)\.(?P<nums>[0-9]+)").unwrap());

static MULTI_LETTER_ABBREV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\p{L}\.){2,}").unwrap());

static INITIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?P<init>\p{Lu})\.").unwrap());

/// Splits text into sentences using language-aware boundary rules.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: Option<Regex>,
    trailing_abbreviations: Option<Regex>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl SentenceSplitter {
    /// Creates a splitter that protects the given abbreviations.
    ///
    /// Entries are matched case-insensitively and must include their dots,
    /// e.g. `"dr."` or `"т.е."`.
    pub fn new(abbreviations: &[&str]) -> Self {
        Self {
            abbreviations: abbreviation_pattern(abbreviations, ""),
            trailing_abbreviations: None,
        }
    }

    /// Adds abbreviations that may also close a sentence.
    ///
    /// Their dot is kept as a boundary when the next word starts with a
    /// capital letter, as in `"pears, etc. Then"`.
    pub fn with_trailing_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        self.trailing_abbreviations =
            abbreviation_pattern(abbreviations, r"(?P<next>\s*[^\s\p{Lu}])");
        self
    }

    /// Creates a splitter with the abbreviation list for `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::new(ENGLISH_ABBREVIATIONS)
                .with_trailing_abbreviations(ENGLISH_TRAILING_ABBREVIATIONS),
            Language::Russian => Self::new(RUSSIAN_ABBREVIATIONS),
        }
    }

    /// Splits `text` into trimmed, whitespace-normalized sentences.
    ///
    /// Blank lines always end a sentence. Text without terminal punctuation
    /// forms a single sentence.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }

        let protected = self.protect(text);

        split_on_enders(&protected)
            .iter()
            .map(|s| repair_sentence(s))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Masks dots that must not be treated as sentence ends.
    fn protect(&self, text: &str) -> String {
        let dot = placeholder::DOT.to_string();

        let mut protected = SUSPENSION_POINTS
            .replace_all(text, placeholder::ELLIPSIS.to_string().as_str())
            .into_owned();

        protected = COMPOSITE_ABBREV
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}", &caps["comp"], dot)
            })
            .into_owned();

        protected = FLOAT_POINT
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}{}", &caps["number"], dot, &caps["decimal"])
            })
            .into_owned();

        protected = LEADING_DECIMAL
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}{}", &caps["space"], dot, &caps["nums"])
            })
            .into_owned();

        if let Some(abbreviations) = &self.abbreviations {
            protected = abbreviations
                .replace_all(&protected, |caps: &Captures| {
                    format!("{}{}", &caps["pre"], caps["abbr"].replace('.', &dot))
                })
                .into_owned();
        }

        if let Some(trailing) = &self.trailing_abbreviations {
            protected = trailing
                .replace_all(&protected, |caps: &Captures| {
                    format!(
                        "{}{}{}",
                        &caps["pre"],
                        caps["abbr"].replace('.', &dot),
                        &caps["next"]
                    )
                })
                .into_owned();
        }

        protected = MULTI_LETTER_ABBREV
            .replace_all(&protected, |caps: &Captures| caps[0].replace('.', &dot))
            .into_owned();

        protected = INITIALS
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}", &caps["init"], dot)
            })
            .into_owned();

        protected
    }
}

/// Builds the matcher for a case-insensitive abbreviation list, followed by
/// `suffix`.
fn abbreviation_pattern(abbreviations: &[&str], suffix: &str) -> Option<Regex> {
    if abbreviations.is_empty() {
        return None;
    }

    let mut entries: Vec<&str> = abbreviations.to_vec();
    // Longest first so "mrs." wins over "mr."
    entries.sort_by_key(|e| std::cmp::Reverse(e.chars().count()));
    let alternation = entries
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        r"(?P<pre>^|[^\p{{L}}\p{{N}}])(?P<abbr>(?i:{})){}",
        alternation, suffix
    );
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(
                "Abbreviation list of {} entries ignored: {}",
                entries.len(),
                e
            );
            None
        }
    }
}

/// Splits English text into sentences.
///
/// # Example
/// ```
/// use luhn::segmentation::split_sentences;
///
/// let text = "Dr. Smith went to Washington. He arrived at 3.14 p.m.";
/// let sentences = split_sentences(text);
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::default().split(text)
}

#[inline]
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…' | placeholder::ELLIPSIS)
}

#[inline]
fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '"' | '\'' | '»' | '\u{201D}' | '\u{2019}')
}

/// Cuts masked text after terminal punctuation and at blank lines.
fn split_on_enders(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        current.push(c);
        i += 1;

        if c == '\n' && blank_line_follows(&chars, i) {
            sentences.push(std::mem::take(&mut current));
            continue;
        }

        if !is_terminator(c) {
            continue;
        }

        let mut suspended = matches!(c, '…' | placeholder::ELLIPSIS);
        while i < chars.len() && (is_terminator(chars[i]) || is_closer(chars[i])) {
            if is_terminator(chars[i]) && !matches!(chars[i], '…' | placeholder::ELLIPSIS) {
                suspended = false;
            }
            current.push(chars[i]);
            i += 1;
        }

        let boundary = match chars.get(i) {
            None => true,
            // Suspension points only end a sentence when a capital follows.
            Some(next) if suspended => {
                next.is_whitespace()
                    && chars[i..]
                        .iter()
                        .find(|c| !c.is_whitespace())
                        .map_or(true, |c| c.is_uppercase())
            }
            Some(next) => next.is_whitespace() || next.is_uppercase(),
        };

        if boundary {
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Checks whether only whitespace, including another newline, separates
/// position `from` from the next visible character.
fn blank_line_follows(chars: &[char], from: usize) -> bool {
    chars[from..]
        .iter()
        .take_while(|c| c.is_whitespace())
        .any(|&c| c == '\n')
}

/// Restores placeholders and collapses internal whitespace.
fn repair_sentence(s: &str) -> String {
    let mut restored = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            placeholder::DOT => restored.push('.'),
            placeholder::ELLIPSIS => restored.push_str("..."),
            other => restored.push(other),
        }
    }

    restored.split_whitespace().collect::<Vec<_>>().join(" ")
}
