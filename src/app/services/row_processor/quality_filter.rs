//! Quality filtering for observation rows
//!
//! Applies the configured confidence and video-quality thresholds. A
//! threshold only applies when the row actually carries the field:
//! absence is not failure, so rows from files without the optional
//! columns pass untouched. Both thresholds compose conjunctively.

use tracing::{debug, info};

use super::stats::ProcessingStats;
use crate::app::models::RawObservationRow;
use crate::config::ConvertOptions;

/// Check if a row passes the configured quality filters
pub fn passes_quality_filters(row: &RawObservationRow, options: &ConvertOptions) -> bool {
    if let (Some(min_confidence), Some(confidence)) = (options.min_confidence, row.confidence) {
        if confidence < min_confidence {
            return false;
        }
    }

    if let (Some(min_quality), Some(quality)) = (options.min_quality, row.video_quality) {
        if quality < min_quality {
            return false;
        }
    }

    true
}

/// Apply quality filters to a batch of rows
///
/// Returns surviving rows in input order and updates `stats` with the
/// filtered-out count. With no thresholds configured this is a pass-through.
pub fn apply_quality_filters(
    rows: Vec<RawObservationRow>,
    options: &ConvertOptions,
    stats: &mut ProcessingStats,
) -> Vec<RawObservationRow> {
    if !options.is_filtering_enabled() {
        debug!("No quality thresholds configured, keeping all {} rows", rows.len());
        return rows;
    }

    let total = rows.len();
    let filtered: Vec<RawObservationRow> = rows
        .into_iter()
        .filter(|row| passes_quality_filters(row, options))
        .collect();

    stats.quality_filtered_out = total - filtered.len();

    info!(
        "Quality filtering complete: {} -> {} rows ({} filtered out)",
        total,
        filtered.len(),
        stats.quality_filtered_out
    );

    filtered
}
