//! Command-line argument definitions for the subcam processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::app::models::AggregationMode;
use crate::config::ConvertOptions;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the subcam observation log processor
///
/// Converts subsea camera observation event logs (one CSV row per
/// detected organism event) into standardized daily Nmax or Obvs summary
/// matrices with cumulative species-discovery statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "subcam-processor",
    version,
    about = "Convert subsea camera observation logs into daily Nmax/Obvs summary matrices",
    long_about = "Processes raw observation event logs exported from subsea monitoring camera \
                  annotation tools into standardized daily summary matrices: Nmax (peak \
                  simultaneous individuals per species per day) or Obvs (observation events per \
                  species per day), with running cumulative species-discovery statistics."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the subcam processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a raw observation log to a daily summary matrix (main command)
    Convert(ConvertArgs),
    /// Score a raw observation log against the expected schema without converting
    Validate(ValidateArgs),
}

/// Summary matrix semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Peak simultaneous individuals per species per day
    Nmax,
    /// Observation-event count per species per day
    Obvs,
}

impl From<Mode> for AggregationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Nmax => AggregationMode::Nmax,
            Mode::Obvs => AggregationMode::Obvs,
        }
    }
}

/// Arguments for the convert command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input raw observation log (CSV)
    #[arg(value_name = "INPUT", help = "Path to the raw observation log CSV file")]
    pub input_path: PathBuf,

    /// Output path for the summary matrix CSV
    ///
    /// If not specified, writes next to the input as
    /// <input stem>_<mode>.csv
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the summary matrix CSV"
    )]
    pub output_path: Option<PathBuf>,

    /// Summary semantics to produce
    #[arg(
        long = "mode",
        value_enum,
        default_value_t = Mode::Nmax,
        help = "Summary matrix semantics (nmax or obvs)"
    )]
    pub mode: Mode,

    /// Minimum confidence level to accept
    ///
    /// Rows carrying a confidence level below this threshold are excluded.
    /// Rows without a confidence field are always retained.
    #[arg(
        long = "min-confidence",
        value_name = "LEVEL",
        help = "Exclude rows with a confidence level below LEVEL"
    )]
    pub min_confidence: Option<i32>,

    /// Minimum quality-of-video level to accept
    ///
    /// Rows carrying a video-quality level below this threshold are
    /// excluded. Rows without a quality field are always retained.
    #[arg(
        long = "min-quality",
        value_name = "LEVEL",
        help = "Exclude rows with a video-quality level below LEVEL"
    )]
    pub min_quality: Option<i32>,

    /// Print the full conversion log after completion
    #[arg(long = "show-log", help = "Print the full conversion log after completion")]
    pub show_log: bool,

    /// Suppress the progress bar
    #[arg(short = 'q', long = "quiet", help = "Suppress the progress bar")]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Build converter options from the CLI thresholds
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            min_confidence: self.min_confidence,
            min_quality: self.min_quality,
        }
    }

    /// Resolve the output path, defaulting beside the input
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .input_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "output".to_string());
                let mode: AggregationMode = self.mode.into();
                self.input_path
                    .with_file_name(format!("{}_{}.csv", stem, mode))
            }
        }
    }
}

/// Report output format for the validate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Arguments for the validate command (advisory schema scoring)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input raw observation log (CSV)
    #[arg(value_name = "INPUT", help = "Path to the raw observation log CSV file")]
    pub input_path: PathBuf,

    /// Report output format
    #[arg(
        long = "format",
        value_enum,
        default_value_t = ReportFormat::Text,
        help = "Report output format"
    )]
    pub format: ReportFormat,
}
