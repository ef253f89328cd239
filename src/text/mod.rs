//! Text processing: languages, normalization, stemming, stop words and tokenization.

mod language;
mod normalizer;
mod stemmer;
mod stopwords;
mod tokenizer;

pub use language::Language;
pub use normalizer::Normalizer;
pub use stemmer::WordStemmer;
pub use stopwords::StopwordFilter;
pub use tokenizer::{tokenizer_for, EnglishTokenizer, RussianTokenizer, Tokenizer};
