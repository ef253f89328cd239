//! Summary selection and rendering.

mod budget;
mod selector;

pub use budget::{clamp_count, SentenceBudget};
pub use selector::{Summary, SummarySelector};
