//! Report driver: load, analyze, print, export.
//!
//! The driver is glue. It resolves the stopword list, reads the input, runs
//! the [`WordFrequencyPipeline`], prints the console report, and writes the
//! configured export. Every failure aborts the run before any report output
//! is produced, except a failed export write, which happens last.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::WordFreqConfig;
use crate::converters::OutputFormat;
use crate::error::{Error, Result};
use crate::pipeline::{FrequencySummary, WordFrequencyPipeline};
use crate::text::StopwordSet;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    /// Summary the report was rendered from
    pub summary: FrequencySummary,
    /// Path of the exported file, if one was written
    pub exported_path: Option<PathBuf>,
}

/// Read a whole UTF-8 text file.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_export(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Orchestrates one word frequency run for a configuration.
#[derive(Debug, Clone, Copy)]
pub struct ReportDriver<'a> {
    config: &'a WordFreqConfig,
}

impl<'a> ReportDriver<'a> {
    /// Create a driver for `config`.
    pub fn new(config: &'a WordFreqConfig) -> Self {
        Self { config }
    }

    /// Load inputs and build the summary without printing anything.
    pub fn analyze(&self) -> Result<FrequencySummary> {
        self.config.validate()?;

        // Language lookup must fail before any file is opened.
        let stopword_path = self.config.stopword_path()?;

        let text = load_text(&self.config.input_file)?;
        log::info!(
            "Read {} bytes from {}",
            text.len(),
            self.config.input_file.display()
        );
        let stopwords = StopwordSet::from_file(stopword_path)?;
        log::info!(
            "Using {} stopwords for language '{}'",
            stopwords.len(),
            self.config.language
        );

        let pipeline = WordFrequencyPipeline::from_config(self.config, stopwords);
        let summary = pipeline.process(&text);
        log::info!("Counted {} words, {} unique", summary.total, summary.unique);
        Ok(summary)
    }

    /// Run the full report, printing the console view to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ReportOutcome> {
        let summary = self.analyze()?;

        let console = OutputFormat::Console.render(&summary, self.config)?;
        out.write_all(console.as_bytes())?;
        out.flush()?;

        let exported_path = self.export(&summary)?;
        Ok(ReportOutcome {
            summary,
            exported_path,
        })
    }

    /// Write the configured export for `summary`, if any.
    pub fn export(&self, summary: &FrequencySummary) -> Result<Option<PathBuf>> {
        let (Some(format), Some(path)) = (self.config.output_format, self.config.output_path()) else {
            return Ok(None);
        };
        let content = format.render(summary, self.config)?;
        write_export(&path, &content)?;
        log::info!("Exported {} report to {}", format, path.display());
        Ok(Some(path))
    }
}

/// Run a report for `config`, printing to standard output.
pub fn run_report(config: &WordFreqConfig) -> Result<ReportOutcome> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    ReportDriver::new(config).run(&mut handle)
}
