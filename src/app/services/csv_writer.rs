//! CSV serialization of the daily summary matrix
//!
//! Renders the in-memory matrix back to CSV text with the fixed prefix
//! columns followed by the taxon columns in the matrix's column order.
//! Dates and integers use format-stable representations so that
//! serializing and re-parsing reproduces the same per-cell values.

use crate::app::models::OutputMatrix;
use crate::constants::{OUTPUT_DATE_FORMAT, OUTPUT_PREFIX_COLUMNS};
use crate::{Error, Result};

/// Render the matrix to CSV text
pub fn data_to_csv(matrix: &OutputMatrix) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = OUTPUT_PREFIX_COLUMNS.to_vec();
    header.extend(matrix.taxa.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| Error::csv_parsing("failed to write CSV header", Some(e)))?;

    for row in &matrix.rows {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(row.date.format(OUTPUT_DATE_FORMAT).to_string());
        record.push(row.total_observations.to_string());
        record.push(row.cumulative_observations.to_string());
        record.push(row.unique_today.to_string());
        record.push(row.new_unique_today.to_string());
        record.push(row.cumulative_new_unique.to_string());
        record.push(row.cumulative_unique_species.to_string());

        for taxon in &matrix.taxa {
            record.push(row.species_value(taxon).to_string());
        }

        writer
            .write_record(&record)
            .map_err(|e| Error::csv_parsing("failed to write CSV record", Some(e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io_error(format!("failed to flush CSV writer: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::io_error(format!("CSV output was not valid UTF-8: {}", e)))
}
