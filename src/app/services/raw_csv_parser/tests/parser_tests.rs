//! Unit tests for parser orchestration over complete log text

use super::{data_line, sample_log, FULL_HEADER};
use crate::app::services::raw_csv_parser::RawCsvParser;
use crate::Error;

/// Test a small realistic log parses completely
#[test]
fn test_parse_sample_log() {
    let parser = RawCsvParser::new();
    let result = parser.parse_text(&sample_log()).unwrap();

    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.stats.rows_parsed, 3);
    assert_eq!(result.stats.records_skipped, 0);
    assert!(result.stats.errors.is_empty());
    assert!(result.column_map.missing_columns().is_empty());
}

/// Test completely empty input fails fast with an empty-input error
#[test]
fn test_parse_empty_text_fails() {
    let parser = RawCsvParser::new();

    let err = parser.parse_text("").unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));

    let err = parser.parse_text("   \n  ").unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));
}

/// Test a header with no data rows is an explicit failure, not an empty success
#[test]
fn test_parse_header_only_fails() {
    let parser = RawCsvParser::new();
    let text = format!("{FULL_HEADER}\n");

    let err = parser.parse_text(&text).unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));
}

/// Test blank trailing lines are skipped without counting as data
#[test]
fn test_parse_skips_blank_records() {
    let parser = RawCsvParser::new();
    let text = format!(
        "{FULL_HEADER}\n{}\n,,,,,,,,\n",
        data_line(
            "dive_042.mp4",
            "00:14:07",
            "2024-03-01 14:30:15",
            "single",
            "1",
            "Cod",
            "Gadus morhua",
            "4",
            "3",
        )
    );

    let result = parser.parse_text(&text).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.stats.records_skipped, 1);
}

/// Test rows with noisy fields still parse (coercion, not rejection)
#[test]
fn test_parse_keeps_noisy_rows() {
    let parser = RawCsvParser::new();
    let text = format!(
        "{FULL_HEADER}\n{}",
        data_line(
            "dive_042.mp4",
            "00:14:07",
            "garbage timestamp",
            "single",
            "-3",
            "Cod",
            "",
            "",
            "",
        )
    );

    let result = parser.parse_text(&text).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].adjusted_timestamp, None);
    assert_eq!(result.rows[0].quantity, 0);
    assert_eq!(result.rows[0].common_name, "Cod");
}
