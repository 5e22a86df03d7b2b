//! Daily summary aggregation for observation rows
//!
//! The central algorithm: groups resolved, filtered rows by calendar date,
//! folds each date's rows into a per-taxon value map under the requested
//! mode (peak quantity for Nmax, event count for Obvs), then threads a
//! discovery accumulator through the dates in ascending order to produce
//! the cumulative statistics.
//!
//! ## Architecture
//!
//! - [`buckets`] - Date partitioning and per-taxon value folding
//! - [`discovery`] - Cumulative species-discovery pass over sorted buckets
//! - [`output_validator`] - Hard invariant checks on the produced matrix

pub mod buckets;
pub mod discovery;
pub mod output_validator;

#[cfg(test)]
pub mod tests;

use tracing::info;

use crate::app::models::{AggregationMode, OutputMatrix};
use crate::app::services::row_processor::ResolvedRow;
use crate::{Error, Result};

pub use buckets::{partition_by_date, DailyBucket, PartitionResult};
pub use discovery::{fold_buckets, DiscoveryState};
pub use output_validator::validate_output;

/// Aggregation outcome: the finished matrix plus per-row exclusions
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// The produced daily summary matrix
    pub matrix: OutputMatrix,

    /// 1-based numbers of rows excluded for an unusable timestamp
    pub undated_rows: Vec<usize>,
}

/// Aggregate resolved rows into the daily summary matrix
///
/// Fails with an empty-input error when no row carries a usable date;
/// an input emptied by upstream filtering behaves the same as an empty
/// input.
pub fn aggregate(rows: &[ResolvedRow], mode: AggregationMode) -> Result<AggregateOutcome> {
    let partition = partition_by_date(rows, mode);

    if partition.buckets.is_empty() {
        return Err(Error::empty_input(
            "no rows with a usable date remain after filtering; nothing to aggregate",
        ));
    }

    let output_rows = fold_buckets(partition.buckets.values());

    let matrix = OutputMatrix {
        mode,
        taxa: partition.taxa_order,
        rows: output_rows,
    };

    info!(
        "Aggregated {} rows into {} dates x {} taxa ({} mode)",
        rows.len(),
        matrix.row_count(),
        matrix.taxon_count(),
        mode
    );

    Ok(AggregateOutcome {
        matrix,
        undated_rows: partition.undated_rows,
    })
}
