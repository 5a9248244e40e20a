//! JSON report converter.

use super::{OutputFormat, ReportConverter};
use crate::config::WordFreqConfig;
use crate::error::Result;
use crate::pipeline::FrequencySummary;

/// Converter for the full summary as indented JSON.
///
/// Decoding the output with [`FrequencySummary::from_json`] reproduces the
/// summary exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    /// Create a new JSON converter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportConverter for JsonConverter {
    fn convert(&self, summary: &FrequencySummary, _config: &WordFreqConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
