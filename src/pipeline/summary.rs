//! The summary record shared by every output converter.

use serde::{Deserialize, Serialize};

use super::counter::{total_words, CountMap};
use super::ranker::WordCount;
use crate::error::Result;

/// Complete result of one counting run.
///
/// Built once by [`FrequencySummary::build`] and only read afterwards. The
/// JSON shape is:
///
/// ```json
/// {
///   "total": 3,
///   "unique": 2,
///   "counts": { "cat": 2, "dog": 1 },
///   "top": [["cat", 2], ["dog", 1]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Sum of all counts
    pub total: usize,
    /// Number of distinct words
    pub unique: usize,
    /// Full count mapping, in first-encounter order
    pub counts: CountMap,
    /// Leading entries of the ranked list
    pub top: Vec<WordCount>,
}

impl FrequencySummary {
    /// Assemble a summary from the count mapping and its ranking.
    ///
    /// `top_n` larger than the ranked list is clamped.
    pub fn build(counts: CountMap, ranked: &[WordCount], top_n: usize) -> Self {
        let take = top_n.min(ranked.len());
        Self {
            total: total_words(&counts),
            unique: counts.len(),
            counts,
            top: ranked[..take].to_vec(),
        }
    }

    /// A summary with no words.
    pub fn empty() -> Self {
        Self::build(CountMap::new(), &[], 0)
    }

    /// Check if no words were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Decode a summary from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
