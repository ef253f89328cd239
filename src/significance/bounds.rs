//! Frequency cutoffs for significant words.

use crate::error::{LuhnError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A frequency cutoff, either a fixed count or a share of the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyBound {
    /// A fixed occurrence count.
    Absolute(usize),
    /// A fraction in `(0, 1]` of the document's total word count,
    /// rounded up.
    Relative(f64),
}

impl FrequencyBound {
    /// Resolves the bound to an occurrence count for a document with
    /// `total_words` words.
    pub fn resolve(&self, total_words: usize) -> usize {
        match *self {
            FrequencyBound::Absolute(count) => count,
            FrequencyBound::Relative(fraction) => (fraction * total_words as f64).ceil() as usize,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            FrequencyBound::Absolute(_) => Ok(()),
            FrequencyBound::Relative(fraction) if fraction > 0.0 && fraction <= 1.0 => Ok(()),
            FrequencyBound::Relative(fraction) => Err(LuhnError::Config(format!(
                "relative frequency bound must be in (0, 1], got {}",
                fraction
            ))),
        }
    }
}

impl FromStr for FrequencyBound {
    type Err = LuhnError;

    /// Parses `"3"` as an absolute count, `"0.05"` as a fraction and
    /// `"5%"` as a percentage.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || LuhnError::Config(format!("invalid frequency bound: {:?}", s));

        let bound = if let Some(percent) = s.strip_suffix('%') {
            let value: f64 = percent.trim().parse().map_err(|_| invalid())?;
            FrequencyBound::Relative(value / 100.0)
        } else if s.contains('.') {
            FrequencyBound::Relative(s.parse().map_err(|_| invalid())?)
        } else {
            FrequencyBound::Absolute(s.parse().map_err(|_| invalid())?)
        };

        bound.validate()?;
        Ok(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<FrequencyBound>().unwrap(), FrequencyBound::Absolute(2));
        assert_eq!("0.25".parse::<FrequencyBound>().unwrap(), FrequencyBound::Relative(0.25));
        assert_eq!("5%".parse::<FrequencyBound>().unwrap(), FrequencyBound::Relative(0.05));
        assert!("abc".parse::<FrequencyBound>().is_err());
        assert!("1.5".parse::<FrequencyBound>().is_err());
        assert!("-3".parse::<FrequencyBound>().is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(FrequencyBound::Absolute(3).resolve(1000), 3);
        assert_eq!(FrequencyBound::Relative(0.01).resolve(250), 3);
        assert_eq!(FrequencyBound::Relative(0.5).resolve(0), 0);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&FrequencyBound::Absolute(2)).unwrap();
        assert_eq!(json, r#"{"absolute":2}"#);
        let bound: FrequencyBound = serde_json::from_str(r#"{"relative":0.1}"#).unwrap();
        assert_eq!(bound, FrequencyBound::Relative(0.1));
    }
}
