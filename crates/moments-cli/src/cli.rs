//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute descriptive statistics and confidence intervals for a sample dataset.
#[derive(Debug, Clone, Parser)]
#[command(name = "moments")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the `*.json` sample datasets
    #[arg(long, env = "MOMENTS_SAMPLES_DIR", default_value = "samples")]
    pub samples_dir: PathBuf,

    /// Dataset to use, by 1-based index or by file name without extension.
    /// Without it, the datasets are listed and one index is read from stdin
    #[arg(short, long)]
    pub sample: Option<String>,

    /// List the available datasets and exit
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places in text output
    #[arg(short, long, default_value_t = 8)]
    pub precision: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled values, one per line
    Text,
    /// The full report as JSON
    Json,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
