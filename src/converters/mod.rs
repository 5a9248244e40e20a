//! Report converters.
//!
//! This module renders a [`FrequencySummary`] in one of three formats:
//! - **Console**: banner, statistics, and a ranked bar chart of the top entries
//! - **JSON**: the whole summary, indented
//! - **CSV**: the top entries as `word,count` rows
//!
//! The set of formats is closed: [`OutputFormat`] names each one and
//! [`OutputFormat::render`] dispatches to its converter.
//!
//! # Examples
//!
//! ```
//! use wordfreq::config::WordFreqConfig;
//! use wordfreq::converters::OutputFormat;
//! use wordfreq::pipeline::WordFrequencyPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = WordFrequencyPipeline::default().process("cat dog cat");
//! let config = WordFreqConfig::default();
//!
//! let csv = OutputFormat::Csv.render(&summary, &config)?;
//! assert_eq!(csv, "word,count\ncat,2\ndog,1");
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod csv;
pub mod json;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use console::ConsoleConverter;
pub use csv::CsvConverter;
pub use json::JsonConverter;

use crate::config::WordFreqConfig;
use crate::error::{Error, Result};
use crate::pipeline::FrequencySummary;

/// Renders a summary into text.
///
/// Converters are presentational: they never aggregate, they only lay out
/// what the summary already holds.
pub trait ReportConverter {
    /// Render `summary` using the display options in `config`.
    fn convert(&self, summary: &FrequencySummary, config: &WordFreqConfig) -> Result<String>;

    /// Format produced by this converter.
    fn format(&self) -> OutputFormat;
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with a bar chart.
    Console,
    /// Indented JSON document of the full summary.
    Json,
    /// Two-column `word,count` table of the top entries.
    Csv,
}

impl OutputFormat {
    /// All formats, in declaration order.
    pub const ALL: [OutputFormat; 3] = [Self::Console, Self::Json, Self::Csv];

    /// Returns the name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// File extension for exports in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Console => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Render `summary` with this format's converter.
    pub fn render(&self, summary: &FrequencySummary, config: &WordFreqConfig) -> Result<String> {
        match self {
            Self::Console => ConsoleConverter::new().convert(summary, config),
            Self::Json => JsonConverter::new().convert(summary, config),
            Self::Csv => CsvConverter::new().convert(summary, config),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}
