//! Subcam Processor Library
//!
//! A Rust library for converting subsea camera observation event logs
//! (one row per detected organism event) into standardized daily summary
//! matrices used by downstream reporting tools.
//!
//! This library provides tools for:
//! - Parsing raw observation CSV files with tolerant field normalization
//! - Scoring input files against the expected raw schema (advisory only)
//! - Filtering rows by confidence and video-quality thresholds
//! - Resolving a single taxon identity per row (scientific name first)
//! - Aggregating per-date/per-species Nmax and Obvs summaries with
//!   cumulative species-discovery statistics
//! - Validating hard invariants on the produced matrix
//! - Structured per-step logging and progress reporting

pub mod config;
pub mod constants;
pub mod converter;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod csv_writer;
        pub mod input_validator;
        pub mod raw_csv_parser;
        pub mod reporter;
        pub mod row_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AggregationMode, OutputMatrix, OutputRow, RawObservationRow};
pub use config::ConvertOptions;
pub use converter::{ConversionResult, Converter};

/// Result type alias for the subcam processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for observation log processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input contained no usable data rows
    #[error("No data: {message}")]
    EmptyInput { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Output matrix invariant violation (an aggregation bug, always fatal)
    #[error("Output invariant violated at row {row}: {message}")]
    OutputInvariant { row: usize, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Conversion cancelled between stages
    #[error("Conversion cancelled during step '{step_name}'")]
    Cancelled { step_name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an output invariant error
    pub fn output_invariant(row: usize, message: impl Into<String>) -> Self {
        Self::OutputInvariant {
            row,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a cancellation error naming the step that was interrupted
    pub fn cancelled(step_name: impl Into<String>) -> Self {
        Self::Cancelled {
            step_name: step_name.into(),
        }
    }

    /// True for failures that abort a conversion (as opposed to per-row issues)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DataValidation { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
