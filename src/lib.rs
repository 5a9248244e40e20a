//! # wordfreq
//!
//! Word frequency analysis for plain text files.
//!
//! ## Pipeline
//!
//! ```text
//! raw text → tokens → cleaned/filtered words → counts → ranking → summary → report
//! ```
//!
//! - **Text**: case folding, whitespace tokenization, edge punctuation
//!   stripping, and stopword filtering ([`text`])
//! - **Counting & Ranking**: insertion-ordered counts and a descending ranking
//!   whose ties keep first-encounter order ([`pipeline`])
//! - **Converters**: console bar chart, JSON, and CSV ([`converters`])
//! - **Report**: load inputs, print, and export ([`report`])
//!
//! ## Quick Start
//!
//! ```
//! use wordfreq::converters::OutputFormat;
//! use wordfreq::pipeline::WordFrequencyPipeline;
//! use wordfreq::text::{PunctuationSet, StopwordSet};
//! use wordfreq::WordFreqConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = WordFrequencyPipeline::new(
//!     StopwordSet::from_words(["the", "a"]),
//!     PunctuationSet::new(".,!"),
//! );
//! let summary = pipeline.process("The cat saw a dog. The dog saw the cat!");
//! assert_eq!(summary.total, 6);
//! assert_eq!(summary.unique, 3);
//!
//! let json = OutputFormat::Json.render(&summary, &WordFreqConfig::default())?;
//! println!("{}", json);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Tokenizing, cleaning, stopwords
pub mod text;

// Counting, ranking, summary
pub mod pipeline;

// Output formats
pub mod converters;

// Load, print, export
pub mod report;

// Re-exports
pub use config::WordFreqConfig;
pub use converters::{OutputFormat, ReportConverter};
pub use error::{Error, Result};
pub use pipeline::{FrequencySummary, WordFrequencyPipeline};
pub use report::{run_report, ReportDriver, ReportOutcome};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
