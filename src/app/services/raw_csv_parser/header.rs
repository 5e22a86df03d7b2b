//! Header analysis for raw observation logs
//!
//! Maps the parsed CSV header onto the expected raw schema. Header matching
//! is order-insensitive and tolerant of case and whitespace differences;
//! missing columns are recorded rather than rejected, since schema
//! compliance is the input validator's concern, not the parser's.

use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

use super::field_parsers::normalize_text;
use crate::constants::raw_columns;

/// Mapping from expected raw schema columns to input column indices
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Canonical expected column name -> index in the input header
    name_to_index: HashMap<&'static str, usize>,

    /// Input header cells as parsed, in input order
    headers: Vec<String>,
}

impl ColumnMap {
    /// Analyze a parsed header row against the expected raw schema
    ///
    /// Matching normalizes whitespace and ignores case. Columns that match
    /// no expected name are kept in `headers` but not mapped.
    pub fn analyze(header_record: &StringRecord) -> Self {
        let headers: Vec<String> = header_record.iter().map(normalize_text).collect();

        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            for expected in raw_columns::EXPECTED {
                if header.eq_ignore_ascii_case(expected) {
                    name_to_index.entry(*expected).or_insert(index);
                }
            }
        }

        debug!(
            "Header analysis: {} of {} expected columns present ({} input columns)",
            name_to_index.len(),
            raw_columns::EXPECTED.len(),
            headers.len()
        );

        Self {
            name_to_index,
            headers,
        }
    }

    /// Input column index of an expected column, if present
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.name_to_index.get(column).copied()
    }

    /// True if the expected column was found in the input header
    pub fn has_column(&self, column: &str) -> bool {
        self.name_to_index.contains_key(column)
    }

    /// Expected columns found in the input, in canonical schema order
    pub fn present_columns(&self) -> Vec<&'static str> {
        raw_columns::EXPECTED
            .iter()
            .copied()
            .filter(|c| self.has_column(c))
            .collect()
    }

    /// Expected columns absent from the input, in canonical schema order
    pub fn missing_columns(&self) -> Vec<&'static str> {
        raw_columns::EXPECTED
            .iter()
            .copied()
            .filter(|c| !self.has_column(c))
            .collect()
    }

    /// Input header cells as parsed
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}
