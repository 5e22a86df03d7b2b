//! Field normalization and coercion utilities for raw observation records
//!
//! Raw logs come out of annotation spreadsheets and carry non-breaking
//! spaces, stray whitespace, and the occasional negative or non-numeric
//! quantity. Everything here fails soft: bad input degrades to a sentinel
//! value, never to an error.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use super::header::ColumnMap;
use crate::constants::{DATETIME_FORMATS, DATE_FORMATS};

/// Normalize free text: collapse non-breaking spaces and whitespace runs
/// to single ordinary spaces and trim both ends
///
/// Never fails; empty or all-whitespace input yields an empty string.
pub fn normalize_text(s: &str) -> String {
    // split_whitespace treats NBSP as whitespace, which also handles the
    // \u{00A0} padding that spreadsheet exports leave behind
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an event quantity
///
/// Non-numeric input yields 0. Negative integers are clamped to 0:
/// quantities are non-negative by domain definition, so a negative reading
/// is data-entry noise rather than an error.
pub fn parse_quantity(s: &str) -> i64 {
    normalize_text(s).parse::<i64>().unwrap_or(0).max(0)
}

/// Parse a combined date-and-time string into a timestamp
///
/// Tries the accepted datetime formats in order, then date-only formats
/// (interpreted as midnight). Returns `None` on any unparsable input so
/// the caller can skip or flag the row without aborting the batch.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let cleaned = normalize_text(s);
    if cleaned.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parse an optional integer level field (confidence, video quality)
///
/// `None` when the text is empty or non-numeric; levels are kept as-is
/// without clamping since the quality filter compares them directly.
pub fn parse_level(s: &str) -> Option<i32> {
    normalize_text(s).parse::<i32>().ok()
}

/// Get a normalized field value from a CSV record by expected column name
///
/// Returns an empty string when the column is absent from the input or
/// the record is too short.
pub fn get_field(record: &StringRecord, map: &ColumnMap, column: &str) -> String {
    map.index_of(column)
        .and_then(|index| record.get(index))
        .map(normalize_text)
        .unwrap_or_default()
}

/// Get an optional field value, distinguishing an absent column from an
/// empty cell
///
/// `None` when the column is not present in the input at all; `Some` of
/// the (possibly empty) normalized cell text otherwise.
pub fn get_optional_field(
    record: &StringRecord,
    map: &ColumnMap,
    column: &str,
) -> Option<String> {
    map.index_of(column)
        .map(|index| record.get(index).map(normalize_text).unwrap_or_default())
}
