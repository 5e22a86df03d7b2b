//! Data models for observation log processing
//!
//! This module contains the core data structures for representing raw
//! camera-detected organism events and the finished daily summary matrix,
//! following the raw observation log schema used by the monitoring cameras.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Raw Observation Rows
// =============================================================================

/// One camera-detected organism event, parsed from a single input line
///
/// Rows are immutable once parsed. Unparsable numeric fields are coerced
/// during parsing (quantity clamps to 0, timestamp becomes `None`), so a
/// constructed row is always structurally well-formed even when the source
/// line was noisy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservationRow {
    /// Source video file name the event was annotated from
    pub file_name: String,

    /// Clock time within the source video ("HH:MM:SS"), kept as text
    pub clock_time: String,

    /// Full adjusted timestamp (date + time); `None` if unparsable
    pub adjusted_timestamp: Option<NaiveDateTime>,

    /// Free-text description of the event
    pub event_observation: String,

    /// Peak number of individuals seen simultaneously in this single event.
    /// Non-negative by domain definition; negative readings are clamped to 0
    /// at parse time.
    pub quantity: i64,

    /// Common name of the identified organism (may be empty)
    pub common_name: String,

    /// Lowest-order scientific name (may be empty)
    pub scientific_name: String,

    /// Annotator confidence level, when the input carries the column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,

    /// Quality-of-video level, when the input carries the column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality: Option<i32>,
}

impl RawObservationRow {
    /// Calendar date of the event, derived from the adjusted timestamp
    pub fn observation_date(&self) -> Option<NaiveDate> {
        self.adjusted_timestamp.map(|ts| ts.date())
    }
}

// =============================================================================
// Aggregation Mode
// =============================================================================

/// Per-species value semantics for the daily summary matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationMode {
    /// Per (date, taxon): maximum event quantity, i.e. peak simultaneous
    /// abundance rather than total events
    Nmax,

    /// Per (date, taxon): count of observation events, ignoring each
    /// event's quantity
    Obvs,
}

impl AggregationMode {
    /// Short lowercase name used in logs and output file naming
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nmax => "nmax",
            Self::Obvs => "obvs",
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Output Matrix
// =============================================================================

/// One finished row of the daily summary matrix
///
/// The fixed prefix fields are followed by a sparse per-taxon mapping; a
/// taxon absent from the mapping scored 0 on that date. Column order for
/// the open-ended taxon columns lives on [`OutputMatrix`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Calendar date this row summarizes
    pub date: NaiveDate,

    /// Number of observation events recorded this date
    pub total_observations: i64,

    /// Running sum of total observations up to and including this date
    pub cumulative_observations: i64,

    /// Number of taxa with a non-zero value this date
    pub unique_today: i64,

    /// Number of taxa seen this date for the first time in the dataset
    pub new_unique_today: i64,

    /// Running sum of `new_unique_today`
    pub cumulative_new_unique: i64,

    /// Size of the seen-taxa set after this date
    pub cumulative_unique_species: i64,

    /// Per-taxon value for this date (max quantity or event count,
    /// depending on the aggregation mode)
    pub species: HashMap<String, i64>,
}

impl OutputRow {
    /// Value for a taxon column on this date (0 when absent)
    pub fn species_value(&self, taxon: &str) -> i64 {
        self.species.get(taxon).copied().unwrap_or(0)
    }
}

/// The complete daily summary matrix for one conversion
///
/// `taxa` fixes the taxon column order: the union of all taxa encountered
/// anywhere in the input, in first-seen input order. Rows are in ascending
/// date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMatrix {
    /// Aggregation mode the matrix was produced under
    pub mode: AggregationMode,

    /// Taxon column order (first-seen order across the whole input)
    pub taxa: Vec<String>,

    /// One row per distinct calendar date, ascending
    pub rows: Vec<OutputRow>,
}

impl OutputMatrix {
    /// Number of date rows in the matrix
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of taxon columns in the matrix
    pub fn taxon_count(&self) -> usize {
        self.taxa.len()
    }
}
