//! How many sentences a summary keeps.

use crate::error::{LuhnError, Result};
use serde::{Deserialize, Serialize};

/// Target summary size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceBudget {
    /// A fixed number of sentences.
    Count(usize),
    /// A fraction in `(0, 1]` of the document's sentences, rounded down but
    /// never below one sentence.
    Ratio(f64),
    /// A fraction in `(0, 1]` of the source text's lines, rounded down and
    /// kept within one sentence and the document's sentence count.
    LineRatio(f64),
}

impl SentenceBudget {
    /// Resolves the budget for a document of `total` sentences read from
    /// `lines` lines of text.
    ///
    /// The result never exceeds `total`.
    pub fn resolve(&self, total: usize, lines: usize) -> usize {
        if total == 0 {
            return 0;
        }
        match *self {
            SentenceBudget::Count(count) => count.min(total),
            SentenceBudget::Ratio(ratio) => share(ratio, total).clamp(1, total),
            SentenceBudget::LineRatio(ratio) => share(ratio, lines).clamp(1, total),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            SentenceBudget::Count(_) => Ok(()),
            SentenceBudget::Ratio(ratio) | SentenceBudget::LineRatio(ratio)
                if ratio > 0.0 && ratio <= 1.0 =>
            {
                Ok(())
            }
            SentenceBudget::Ratio(ratio) | SentenceBudget::LineRatio(ratio) => {
                Err(LuhnError::Config(format!(
                    "summary ratio must be in (0, 1], got {}",
                    ratio
                )))
            }
        }
    }
}

#[inline]
fn share(ratio: f64, of: usize) -> usize {
    (ratio * of as f64).floor() as usize
}

/// Clamps a signed sentence request to `[0, total]`.
///
/// Negative requests select nothing.
pub fn clamp_count(desired: i64, total: usize) -> usize {
    if desired <= 0 {
        0
    } else {
        usize::try_from(desired).map_or(total, |d| d.min(total))
    }
}
