//! Tests for the daily summary aggregator
//!
//! Unit tests for date partitioning, the discovery fold, and the output
//! invariant validator, plus shared row fixtures.


use crate::app::models::RawObservationRow;
use crate::app::services::row_processor::ResolvedRow;
use chrono::NaiveDate;

/// Create a resolved row for a taxon on a given day with a quantity
pub fn resolved_row(taxon: &str, year: i32, month: u32, day: u32, quantity: i64) -> ResolvedRow {
    ResolvedRow {
        row: RawObservationRow {
            file_name: "dive_042.mp4".to_string(),
            clock_time: "00:14:07".to_string(),
            adjusted_timestamp: NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(12, 0, 0),
            event_observation: "test event".to_string(),
            quantity,
            common_name: String::new(),
            scientific_name: taxon.to_string(),
            confidence: None,
            video_quality: None,
        },
        taxon: taxon.to_string(),
    }
}

/// Create a resolved row whose timestamp failed to parse
pub fn undated_row(taxon: &str, quantity: i64) -> ResolvedRow {
    let mut resolved = resolved_row(taxon, 2024, 3, 1, quantity);
    resolved.row.adjusted_timestamp = None;
    resolved
}
