//! Stopword lists and the countability filter.
//!
//! A stopword list is a plain text file with one word per line. Lines are
//! trimmed and case-folded on load; blank lines are skipped, so the set never
//! contains the empty word.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Immutable set of case-folded stopwords for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering beyond empty words).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from an in-memory list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| fold_line(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Read a one-word-per-line list from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = fold_line(&line?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Load a stopword file.
    ///
    /// A missing or unreadable file is reported as [`Error::FileRead`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let set = Self::from_reader(BufReader::new(file)).map_err(read_err)?;
        log::debug!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Check if a word is a stopword (exact match on the folded form).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check if a cleaned word should be counted: non-empty and not a stopword.
    pub fn is_countable(&self, word: &str) -> bool {
        is_countable(word, self)
    }

    /// Number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Countability predicate: true iff `word` is non-empty and not in `stopwords`.
///
/// # Examples
///
/// ```
/// use wordfreq::text::{is_countable, StopwordSet};
///
/// let stopwords = StopwordSet::from_words(["the"]);
/// assert!(is_countable("cat", &stopwords));
/// assert!(!is_countable("the", &stopwords));
/// assert!(!is_countable("", &stopwords));
/// ```
pub fn is_countable(word: &str, stopwords: &StopwordSet) -> bool {
    !word.is_empty() && !stopwords.contains(word)
}

fn fold_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_words() {
        let set = StopwordSet::from_words(["the", "and", "a"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(!set.contains("cat"));
    }

    #[test]
    fn test_from_reader_trims_and_folds() {
        let input = "  The \nAND\n\n   \na\n";
        let set = StopwordSet::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("a"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_reader_duplicates_collapse() {
        let set = StopwordSet::from_reader(Cursor::new("the\nthe\nThe\n")).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_reader_crlf() {
        let set = StopwordSet::from_reader(Cursor::new("of\r\nin\r\n")).unwrap();
        assert!(set.contains("of"));
        assert!(set.contains("in"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = StopwordSet::from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_is_countable() {
        let set = StopwordSet::from_words(["the"]);
        assert!(set.is_countable("cat"));
        assert!(!set.is_countable("the"));
        assert!(!set.is_countable(""));
    }

    #[test]
    fn test_is_countable_is_exact_match() {
        // Folding happens upstream in the tokenizer, not here.
        let set = StopwordSet::from_words(["the"]);
        assert!(set.is_countable("The"));
    }

    #[test]
    fn test_empty_set() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(set.is_countable("the"));
        assert!(!set.is_countable(""));
    }
}
