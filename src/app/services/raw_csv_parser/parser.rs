//! Core raw log parser implementation
//!
//! This module provides the main parser orchestration over a complete
//! in-memory CSV text: header analysis, record iteration, and statistics
//! collection.

use tracing::{debug, info};

use super::header::ColumnMap;
use super::record_parser::parse_observation_row;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parser for raw observation log CSV text
///
/// The parser is tolerant at the record level (CSV-level errors skip the
/// record, field-level noise coerces to sentinels) and strict only about
/// having any data at all: an empty input or a header with no data rows
/// is fatal.
#[derive(Debug, Default)]
pub struct RawCsvParser;

impl RawCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse raw observation log text into rows with statistics
    pub fn parse_text(&self, csv_text: &str) -> Result<ParseResult> {
        if csv_text.trim().is_empty() {
            return Err(Error::empty_input(
                "input is empty: no header or data rows found",
            ));
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing("failed to read CSV header", Some(e)))?;
        let column_map = ColumnMap::analyze(headers);

        let mut stats = ParseStats::new();
        let mut rows = Vec::new();

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => {
                    // Skip fully blank records left behind by trailing newlines
                    if record.iter().all(|field| field.trim().is_empty()) {
                        stats.records_skipped += 1;
                        continue;
                    }

                    rows.push(parse_observation_row(&record, &column_map));
                    stats.rows_parsed += 1;
                }
                Err(e) => {
                    stats.records_skipped += 1;
                    stats.errors.push(format!(
                        "CSV parse error at record {}: {}",
                        stats.total_records, e
                    ));
                    debug!("Skipped record {}: {}", stats.total_records, e);
                }
            }
        }

        if rows.is_empty() {
            return Err(Error::empty_input(
                "no data rows found after the header line",
            ));
        }

        info!("{}", stats.summary());

        Ok(ParseResult {
            rows,
            column_map,
            stats,
        })
    }
}
