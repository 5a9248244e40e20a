//! CSV report converter.
//!
//! Writes the top entries only, one `word,count` row each, joined by `\n`
//! with no trailing newline. Fields are not quoted or escaped: a word that
//! contains a comma, quote, or line break is written verbatim and a warning
//! is logged.

use super::{OutputFormat, ReportConverter};
use crate::config::WordFreqConfig;
use crate::error::Result;
use crate::pipeline::FrequencySummary;

/// Header row of every CSV export.
pub const CSV_HEADER: &str = "word,count";

/// Converter for the top entries as a two-column CSV table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvConverter;

impl CsvConverter {
    /// Create a new CSV converter.
    pub fn new() -> Self {
        Self
    }
}

/// Check if a field would need quoting under RFC 4180.
pub fn needs_escaping(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

impl ReportConverter for CsvConverter {
    fn convert(&self, summary: &FrequencySummary, _config: &WordFreqConfig) -> Result<String> {
        let mut lines = Vec::with_capacity(summary.top.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for (word, count) in &summary.top {
            if needs_escaping(word) {
                log::warn!("CSV field {:?} contains a delimiter or quote and is written unescaped", word);
            }
            lines.push(format!("{},{}", word, count));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}
