//! Descending-frequency ranking with deterministic tie-breaking.
//!
//! Entries are ordered by the key `(Reverse(count), first_index)`, where
//! `first_index` is the word's position in the [`CountMap`]. Ties therefore
//! keep first-encounter order no matter which sort routine is used.

use std::cmp::Reverse;

use super::counter::CountMap;

/// A `(word, count)` pair.
pub type WordCount = (String, usize);

/// Rank every entry of `counts` by count, highest first.
///
/// # Examples
///
/// ```
/// use wordfreq::pipeline::{rank_words, CountMap};
///
/// let mut counts = CountMap::new();
/// counts.insert("a".to_string(), 1);
/// counts.insert("b".to_string(), 3);
/// counts.insert("c".to_string(), 2);
///
/// let ranked = rank_words(&counts);
/// assert_eq!(ranked[0], ("b".to_string(), 3));
/// assert_eq!(ranked[2], ("a".to_string(), 1));
/// ```
pub fn rank_words(counts: &CountMap) -> Vec<WordCount> {
    let mut order: Vec<(usize, &String, usize)> = counts
        .iter()
        .enumerate()
        .map(|(index, (word, &count))| (index, word, count))
        .collect();

    // Unstable sort is fine: the index makes every key distinct.
    order.sort_unstable_by_key(|&(index, _, count)| (Reverse(count), index));

    order
        .into_iter()
        .map(|(_, word, count)| (word.clone(), count))
        .collect()
}
