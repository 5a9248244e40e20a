//! Case folding and whitespace tokenization.
//!
//! Raw text is first normalized (see [`CaseFolding`]) and then split on runs of
//! Unicode whitespace. Punctuation is left attached to the tokens; stripping it
//! is the job of the [`cleaner`](super::cleaner).

use serde::{Deserialize, Serialize};

/// Normalization applied to raw text before it is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    /// Fold to lowercase (default). Stopword lookup assumes this.
    #[default]
    Lowercase,
    /// Keep the original casing.
    Preserve,
}

/// Normalize raw text according to `folding`.
///
/// # Examples
///
/// ```
/// use wordfreq::text::{normalize, CaseFolding};
///
/// assert_eq!(normalize("Hello WORLD", CaseFolding::Lowercase), "hello world");
/// assert_eq!(normalize("Hello WORLD", CaseFolding::Preserve), "Hello WORLD");
/// ```
pub fn normalize(text: &str, folding: CaseFolding) -> String {
    match folding {
        CaseFolding::Lowercase => text.to_lowercase(),
        CaseFolding::Preserve => text.to_string(),
    }
}

/// Split already-normalized text into whitespace-delimited tokens.
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalize `text` and split it into tokens, preserving input order.
///
/// Empty or whitespace-only input yields an empty vector.
///
/// # Examples
///
/// ```
/// use wordfreq::text::{tokenize, CaseFolding};
///
/// let tokens = tokenize("One two\n\tTHREE", CaseFolding::Lowercase);
/// assert_eq!(tokens, vec!["one", "two", "three"]);
/// ```
pub fn tokenize(text: &str, folding: CaseFolding) -> Vec<String> {
    let normalized = normalize(text, folding);
    split_tokens(&normalized).map(str::to_string).collect()
}
