//! Raw observation log parser for subsea camera CSV exports
//!
//! This module provides a tolerant parser for raw observation logs focused
//! on robust field normalization and coercion. Noisy fields degrade to
//! sentinel values (zero quantity, missing timestamp) instead of aborting
//! the batch; only a structurally empty input is fatal.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration over the input text
//! - [`header`] - Header analysis against the expected raw schema
//! - [`record_parser`] - Individual CSV record processing
//! - [`field_parsers`] - Normalization and coercion utilities
//! - [`stats`] - Parsing statistics and result structures

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::ColumnMap;
pub use parser::RawCsvParser;
pub use stats::{ParseResult, ParseStats};
