//! Console report converter.
//!
//! Layout:
//!
//! ```text
//!
//! ==================================================
//! WORD FREQUENCY ANALYSIS - data/essay.txt
//! ==================================================
//!
//! Total words (after removing stopwords): 6
//! Unique words: 3
//!
//! Top 10 most frequent words:
//!
//!  1. cat               3 ***
//!  2. bird              2 **
//!  3. dog               1 *
//!
//! ```

use super::{OutputFormat, ReportConverter};
use crate::config::WordFreqConfig;
use crate::error::Result;
use crate::pipeline::FrequencySummary;

/// Width of the `=` banner around the title.
const BANNER_WIDTH: usize = 50;

/// Converter for the human-readable console report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleConverter;

impl ConsoleConverter {
    /// Create a new console converter.
    pub fn new() -> Self {
        Self
    }

    fn write_header(out: &mut String, source: &str) {
        let banner = "=".repeat(BANNER_WIDTH);
        out.push('\n');
        out.push_str(&banner);
        out.push('\n');
        out.push_str(&format!("WORD FREQUENCY ANALYSIS - {}\n", source));
        out.push_str(&banner);
        out.push_str("\n\n");
    }

    fn write_stats(out: &mut String, summary: &FrequencySummary) {
        out.push_str(&format!("Total words (after removing stopwords): {}\n", summary.total));
        out.push_str(&format!("Unique words: {}\n\n", summary.unique));
    }

    fn write_top(out: &mut String, summary: &FrequencySummary, config: &WordFreqConfig) {
        out.push_str(&format!("Top {} most frequent words:\n\n", config.top_n));

        let bar_char = config.bar_char.to_string();
        for (rank, (word, count)) in summary.top.iter().enumerate() {
            out.push_str(&format_row(rank + 1, word, *count, config.word_width, &bar_char));
            out.push('\n');
        }
    }
}

/// Render one ranked row: rank, word padded/truncated to `width`, count, bar.
///
/// The bar is `bar` repeated `count` times.
pub fn format_row(rank: usize, word: &str, count: usize, width: usize, bar: &str) -> String {
    format!(
        "{:>2}. {:<width$.width$} {:>3} {}",
        rank,
        word,
        count,
        bar.repeat(count),
        width = width
    )
}

impl ReportConverter for ConsoleConverter {
    fn convert(&self, summary: &FrequencySummary, config: &WordFreqConfig) -> Result<String> {
        let mut out = String::new();
        Self::write_header(&mut out, &config.input_file.display().to_string());
        Self::write_stats(&mut out, summary);
        Self::write_top(&mut out, summary, config);
        out.push('\n');
        Ok(out)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}
