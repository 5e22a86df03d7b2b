//! Individual record processing for raw observation logs
//!
//! Converts one CSV record into a [`RawObservationRow`]. Field-level
//! problems are coerced by the field parsers, so record parsing itself is
//! infallible; a malformed record yields a row with sentinel values that
//! later stages skip or flag.

use csv::StringRecord;

use super::field_parsers::{
    get_field, get_optional_field, parse_level, parse_quantity, parse_timestamp,
};
use super::header::ColumnMap;
use crate::app::models::RawObservationRow;
use crate::constants::raw_columns;

/// Parse one CSV record into a raw observation row
pub fn parse_observation_row(record: &StringRecord, map: &ColumnMap) -> RawObservationRow {
    let adjusted_raw = get_field(record, map, raw_columns::ADJUSTED_DATETIME);
    let quantity_raw = get_field(record, map, raw_columns::QUANTITY);

    RawObservationRow {
        file_name: get_field(record, map, raw_columns::FILE_NAME),
        clock_time: get_field(record, map, raw_columns::TIMESTAMPS),
        adjusted_timestamp: parse_timestamp(&adjusted_raw),
        event_observation: get_field(record, map, raw_columns::EVENT_OBSERVATION),
        quantity: parse_quantity(&quantity_raw),
        common_name: get_field(record, map, raw_columns::COMMON_NAME),
        scientific_name: get_field(record, map, raw_columns::SCIENTIFIC_NAME),
        confidence: get_optional_field(record, map, raw_columns::CONFIDENCE)
            .and_then(|s| parse_level(&s)),
        video_quality: get_optional_field(record, map, raw_columns::VIDEO_QUALITY)
            .and_then(|s| parse_level(&s)),
    }
}
