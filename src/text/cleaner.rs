//! Edge punctuation stripping.

use serde::{Deserialize, Serialize};

/// Set of characters trimmed from both ends of a token.
///
/// Interior characters are never touched, so `"don't"` stays intact when `'`
/// is in the set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PunctuationSet {
    chars: Vec<char>,
}

impl PunctuationSet {
    /// Build a set from every character in `chars`. Duplicates collapse.
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = Vec::new();
        for c in chars.chars() {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self { chars: set }
    }

    /// An empty set: cleaning becomes the identity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if `c` is trimmed by this set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct characters in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Strip leading and trailing members of this set from `token`.
    pub fn clean<'a>(&self, token: &'a str) -> &'a str {
        clean_word(token, self)
    }
}

impl From<String> for PunctuationSet {
    fn from(chars: String) -> Self {
        Self::new(&chars)
    }
}

impl From<&str> for PunctuationSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl From<PunctuationSet> for String {
    fn from(set: PunctuationSet) -> Self {
        set.chars.into_iter().collect()
    }
}

/// Remove any leading/trailing characters of `token` that are in `punctuation`.
///
/// Trimming proceeds from both ends until a character outside the set is found
/// or the token is exhausted, so the result may be empty. The operation is
/// idempotent.
///
/// # Examples
///
/// ```
/// use wordfreq::text::{clean_word, PunctuationSet};
///
/// let punct = PunctuationSet::new(".,!");
/// assert_eq!(clean_word("hello,", &punct), "hello");
/// assert_eq!(clean_word("...!", &punct), "");
/// assert_eq!(clean_word("e.g.", &punct), "e.g");
/// ```
pub fn clean_word<'a>(token: &'a str, punctuation: &PunctuationSet) -> &'a str {
    if punctuation.is_empty() {
        return token;
    }
    token.trim_matches(|c: char| punctuation.contains(c))
}
