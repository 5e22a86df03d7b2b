//! Parsing statistics and result structures for raw log processing

use super::header::ColumnMap;
use crate::app::models::RawObservationRow;

/// Parsing result with rows, header analysis, and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed observation rows in input order
    pub rows: Vec<RawObservationRow>,

    /// Header analysis against the expected raw schema
    pub column_map: ColumnMap,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of rows successfully parsed
    pub rows_parsed: usize,

    /// Number of records skipped due to CSV-level errors
    pub records_skipped: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            rows_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} records ({:.1}% success, {} skipped)",
            self.rows_parsed,
            self.total_records,
            self.success_rate(),
            self.records_skipped
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
