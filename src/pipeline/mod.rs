//! Word frequency pipeline.
//!
//! ```text
//! raw text
//!     ↓
//! [tokenize] (normalize + split on whitespace)
//!     ↓
//! [count_words] (clean → filter → count)
//!     ↓
//! CountMap (first-encounter order)
//!     ↓
//! [rank_words] (count desc, ties by first encounter)
//!     ↓
//! [FrequencySummary::build] (total, unique, counts, top N)
//! ```
//!
//! Every stage is a pure function; [`WordFrequencyPipeline`] only holds the
//! inputs they share.

pub mod counter;
pub mod ranker;
pub mod summary;

pub use counter::{count_words, total_words, CountMap};
pub use ranker::{rank_words, WordCount};
pub use summary::FrequencySummary;

use crate::config::WordFreqConfig;
use crate::text::{tokenize, CaseFolding, PunctuationSet, StopwordSet};

/// Runs raw text through tokenization, counting, ranking, and summary building.
#[derive(Debug, Clone)]
pub struct WordFrequencyPipeline {
    stopwords: StopwordSet,
    punctuation: PunctuationSet,
    case_folding: CaseFolding,
    top_n: usize,
}

impl WordFrequencyPipeline {
    /// Default number of ranked entries kept in the summary.
    pub const DEFAULT_TOP_N: usize = 10;

    /// Create a pipeline with the given stopwords and punctuation.
    pub fn new(stopwords: StopwordSet, punctuation: PunctuationSet) -> Self {
        Self {
            stopwords,
            punctuation,
            case_folding: CaseFolding::default(),
            top_n: Self::DEFAULT_TOP_N,
        }
    }

    /// Create a pipeline from a configuration and an already-loaded stopword set.
    pub fn from_config(config: &WordFreqConfig, stopwords: StopwordSet) -> Self {
        Self::new(stopwords, config.punctuation.clone())
            .with_case_folding(config.case_folding)
            .with_top_n(config.top_n)
    }

    /// Set case folding (builder pattern).
    pub fn with_case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }

    /// Set the top-N limit (builder pattern).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Stopwords in use.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Top-N limit in use.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Tokenize and count `text` without ranking.
    pub fn count(&self, text: &str) -> CountMap {
        let tokens = tokenize(text, self.case_folding);
        log::debug!("Tokenized input into {} tokens", tokens.len());
        count_words(&tokens, &self.stopwords, &self.punctuation)
    }

    /// Process `text` into a [`FrequencySummary`].
    pub fn process(&self, text: &str) -> FrequencySummary {
        let counts = self.count(text);
        let ranked = rank_words(&counts);
        log::debug!("Ranked {} distinct words", ranked.len());
        FrequencySummary::build(counts, &ranked, self.top_n)
    }
}

impl Default for WordFrequencyPipeline {
    fn default() -> Self {
        Self::new(StopwordSet::empty(), PunctuationSet::empty())
    }
}
