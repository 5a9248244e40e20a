//! Text preprocessing: normalization, tokenization, cleaning, and stopwords.
//!
//! ```text
//! raw text → [normalize] → [split_tokens] → token → [clean_word] → [is_countable]
//! ```

pub mod cleaner;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::{clean_word, PunctuationSet};
pub use stopwords::{is_countable, StopwordSet};
pub use tokenizer::{normalize, split_tokens, tokenize, CaseFolding};
