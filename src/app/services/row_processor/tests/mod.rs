//! Tests for the row processing pipeline
//!
//! Unit tests for taxon resolution and quality filtering, plus shared
//! row fixtures.

pub mod stats_tests;

use crate::app::models::RawObservationRow;
use chrono::NaiveDate;

/// Create a test row with the given names and levels
pub fn test_row(
    common_name: &str,
    scientific_name: &str,
    confidence: Option<i32>,
    video_quality: Option<i32>,
) -> RawObservationRow {
    RawObservationRow {
        file_name: "dive_042.mp4".to_string(),
        clock_time: "00:14:07".to_string(),
        adjusted_timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 30, 15),
        event_observation: "test event".to_string(),
        quantity: 1,
        common_name: common_name.to_string(),
        scientific_name: scientific_name.to_string(),
        confidence,
        video_quality,
    }
}
