//! Tests for the raw observation log parser
//!
//! This module provides unit tests for header analysis, field coercion,
//! record parsing, and parser orchestration, plus shared fixtures.

pub mod parser_tests;

/// Full expected header line in canonical column order
pub const FULL_HEADER: &str = "File Name,Timestamps (HH:MM:SS),Adjusted Date and Time,\
Event Observation,Quantity (Nmax),Common Name,Lowest Order Scientific Name,\
Confidence Level,Quality of Video";

/// Header line missing the optional confidence and quality columns
pub const HEADER_NO_OPTIONAL: &str = "File Name,Timestamps (HH:MM:SS),\
Adjusted Date and Time,Event Observation,Quantity (Nmax),Common Name,\
Lowest Order Scientific Name";

/// Build a full-schema data line from its nine cells
pub fn data_line(
    file: &str,
    clock: &str,
    adjusted: &str,
    event: &str,
    quantity: &str,
    common: &str,
    scientific: &str,
    confidence: &str,
    quality: &str,
) -> String {
    format!(
        "{file},{clock},{adjusted},{event},{quantity},{common},{scientific},{confidence},{quality}"
    )
}

/// A small realistic log: three events across two days, two taxa
pub fn sample_log() -> String {
    let mut text = String::from(FULL_HEADER);
    text.push('\n');
    text.push_str(&data_line(
        "dive_042.mp4",
        "00:14:07",
        "2024-03-01 14:30:15",
        "pair near ledge",
        "3",
        "Atlantic cod",
        "Gadus morhua",
        "4",
        "3",
    ));
    text.push('\n');
    text.push_str(&data_line(
        "dive_042.mp4",
        "00:52:41",
        "2024-03-01 15:08:49",
        "school passing",
        "5",
        "Atlantic cod",
        "Gadus morhua",
        "5",
        "4",
    ));
    text.push('\n');
    text.push_str(&data_line(
        "dive_043.mp4",
        "00:03:12",
        "2024-03-02 09:12:00",
        "single on sand",
        "1",
        "Redfish",
        "Sebastes norvegicus",
        "3",
        "3",
    ));
    text.push('\n');
    text
}
