//! Configuration for a word frequency run.
//!
//! A [`WordFreqConfig`] is built once (from defaults, builder calls, or a JSON
//! file) and passed by reference to the report driver and converters.
//!
//! # JSON shape
//!
//! Every field is optional; missing fields take their default.
//!
//! ```json
//! {
//!   "input_file": "data/essay.txt",
//!   "punctuation": ".,!?;:\"()[]",
//!   "top_n": 10,
//!   "bar_char": "*",
//!   "word_width": 15,
//!   "language": "english",
//!   "stopword_files": { "english": "data/stopwords.txt" },
//!   "output_format": "csv",
//!   "output_file": "output",
//!   "case_folding": "lowercase"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::converters::OutputFormat;
use crate::error::{Error, Result};
use crate::text::{CaseFolding, PunctuationSet};

/// Word frequency configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFreqConfig {
    /// Text file to analyze.
    pub input_file: PathBuf,

    /// Characters stripped from both ends of each token.
    pub punctuation: PunctuationSet,

    /// Number of ranked entries kept in the summary and printed.
    pub top_n: usize,

    /// Character repeated to draw the console bar chart.
    pub bar_char: char,

    /// Display width of the word column in the console report.
    pub word_width: usize,

    /// Language selector; must be a key of `stopword_files`.
    pub language: String,

    /// Language → stopword list path.
    pub stopword_files: IndexMap<String, PathBuf>,

    /// Export format. `None` writes no file.
    pub output_format: Option<OutputFormat>,

    /// Base name of the exported file; the format's extension is appended.
    pub output_file: String,

    /// Normalization applied before tokenizing.
    pub case_folding: CaseFolding,
}

impl Default for WordFreqConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFreqConfig {
    /// Default punctuation set.
    pub const DEFAULT_PUNCTUATION: &'static str = ".,!?;:\"()[]";

    /// Create a configuration with the stock defaults.
    pub fn new() -> Self {
        let mut stopword_files = IndexMap::new();
        stopword_files.insert("english".to_string(), PathBuf::from("data/stopwords.txt"));
        stopword_files.insert("complete".to_string(), PathBuf::from("data/stopwords_complete.txt"));
        stopword_files.insert("spanish".to_string(), PathBuf::from("data/stopwords_es.txt"));

        Self {
            input_file: PathBuf::from("data/essay.txt"),
            punctuation: PunctuationSet::new(Self::DEFAULT_PUNCTUATION),
            top_n: 10,
            bar_char: '*',
            word_width: 15,
            language: "english".to_string(),
            stopword_files,
            output_format: None,
            output_file: "output".to_string(),
            case_folding: CaseFolding::Lowercase,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Relative paths inside the file are kept as written and resolved against
    /// the working directory when used.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check option ranges.
    pub fn validate(&self) -> Result<()> {
        if self.word_width == 0 {
            return Err(Error::InvalidConfig("word_width must be at least 1".to_string()));
        }
        if self.output_format.is_some() && self.output_file.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "output_file must not be empty when an output format is set".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the stopword file for the configured language.
    ///
    /// Matching is case-insensitive. Fails with [`Error::UnknownLanguage`]
    /// without touching the file system.
    pub fn stopword_path(&self) -> Result<&Path> {
        let wanted = self.language.to_lowercase();
        self.stopword_files
            .iter()
            .find(|(language, _)| language.to_lowercase() == wanted)
            .map(|(_, path)| path.as_path())
            .ok_or_else(|| Error::UnknownLanguage(self.language.clone()))
    }

    /// Path of the exported file, if an output format is configured.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_format
            .map(|format| PathBuf::from(format!("{}.{}", self.output_file, format.extension())))
    }

    /// Set the input file (builder pattern).
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = path.into();
        self
    }

    /// Set the punctuation characters (builder pattern).
    pub fn with_punctuation(mut self, chars: &str) -> Self {
        self.punctuation = PunctuationSet::new(chars);
        self
    }

    /// Set the top-N limit (builder pattern).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the bar character (builder pattern).
    pub fn with_bar_char(mut self, bar_char: char) -> Self {
        self.bar_char = bar_char;
        self
    }

    /// Set the word column width (builder pattern).
    pub fn with_word_width(mut self, width: usize) -> Self {
        self.word_width = width;
        self
    }

    /// Set the language selector (builder pattern).
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Map a language to a stopword file, replacing any existing mapping.
    pub fn with_stopword_file(mut self, language: &str, path: impl Into<PathBuf>) -> Self {
        self.stopword_files.insert(language.to_string(), path.into());
        self
    }

    /// Set the export format (builder pattern).
    pub fn with_output_format(mut self, format: Option<OutputFormat>) -> Self {
        self.output_format = format;
        self
    }

    /// Set the export base name (builder pattern).
    pub fn with_output_file(mut self, base_name: &str) -> Self {
        self.output_file = base_name.to_string();
        self
    }

    /// Set case folding (builder pattern).
    pub fn with_case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }
}
