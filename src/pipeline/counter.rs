//! Frequency counting over a token stream.

use indexmap::IndexMap;

use crate::text::{clean_word, is_countable, PunctuationSet, StopwordSet};

/// Word → occurrence count, iterated in first-encounter order.
///
/// Insertion order is what the [`ranker`](super::ranker) uses to break ties,
/// so this is an `IndexMap` rather than a `HashMap`.
pub type CountMap = IndexMap<String, usize>;

/// Clean, filter, and count `tokens` in input order.
///
/// Each token is stripped of edge punctuation, then counted if it is
/// non-empty and not a stopword. Stopword sets are stored lowercased, so the
/// lookup uses the lowercased word while the count keeps the word as written.
///
/// # Examples
///
/// ```
/// use wordfreq::pipeline::count_words;
/// use wordfreq::text::{PunctuationSet, StopwordSet};
///
/// let counts = count_words(
///     ["hello,", "hello!", "world."],
///     &StopwordSet::empty(),
///     &PunctuationSet::new(".,!"),
/// );
/// assert_eq!(counts["hello"], 2);
/// assert_eq!(counts["world"], 1);
/// ```
pub fn count_words<I, S>(tokens: I, stopwords: &StopwordSet, punctuation: &PunctuationSet) -> CountMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = CountMap::new();
    for token in tokens {
        let word = clean_word(token.as_ref(), punctuation);
        if !is_countable(&word.to_lowercase(), stopwords) {
            continue;
        }
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_string(), 1);
            },
        }
    }
    counts
}

/// Sum of all counts.
pub fn total_words(counts: &CountMap) -> usize {
    counts.values().sum()
}
