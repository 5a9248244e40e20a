//! Word Frequency Report
//!
//! Prints a ranked word frequency report for a text file and optionally
//! exports it as JSON or CSV.
//!
//! Usage:
//!   cargo run --release --bin wordfreq
//!   cargo run --release --bin wordfreq -- --config wordfreq.json
//!   cargo run --release --bin wordfreq -- --input essay.txt --language spanish --format csv --top 20
//!
//! Set `RUST_LOG=info` (or `debug`) for progress logging on stderr.

use std::path::PathBuf;

use wordfreq::{run_report, Error, OutputFormat, Result, WordFreqConfig};

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    language: Option<String>,
    format: Option<String>,
    top: Option<String>,
}

impl CliArgs {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    /// Parse arguments (program name excluded). A value flag in last
    /// position is an error rather than being dropped.
    fn parse(args: &[String]) -> Result<Self> {
        let mut cli = Self::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let takes_value = matches!(
                flag,
                "--config" | "-c" | "--input" | "-i" | "--language" | "-l" | "--format" | "-f" | "--top" | "-n"
            );
            if !takes_value {
                log::warn!("Ignoring unrecognized argument: {}", flag);
                i += 1;
                continue;
            }

            let value = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| Error::InvalidConfig(format!("{} expects a value", flag)))?;
            match flag {
                "--config" | "-c" => cli.config = Some(PathBuf::from(value)),
                "--input" | "-i" => cli.input = Some(PathBuf::from(value)),
                "--language" | "-l" => cli.language = Some(value),
                "--format" | "-f" => cli.format = Some(value),
                _ => cli.top = Some(value),
            }
            i += 2;
        }

        Ok(cli)
    }

    fn into_config(self) -> Result<WordFreqConfig> {
        let mut config = match &self.config {
            Some(path) => WordFreqConfig::from_file(path)?,
            None => WordFreqConfig::default(),
        };

        if let Some(input) = self.input {
            config = config.with_input_file(input);
        }
        if let Some(language) = &self.language {
            config = config.with_language(language);
        }
        if let Some(format) = &self.format {
            config = config.with_output_format(Some(format.parse::<OutputFormat>()?));
        }
        if let Some(top) = &self.top {
            let top_n = top.parse::<usize>().map_err(|e| {
                Error::InvalidConfig(format!("--top expects a number, got '{}': {}", top, e))
            })?;
            config = config.with_top_n(top_n);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init();

    let config = match CliArgs::from_args().and_then(CliArgs::into_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    match run_report(&config) {
        Ok(outcome) => {
            if let Some(path) = outcome.exported_path {
                println!("Exported: {}", path.display());
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}
