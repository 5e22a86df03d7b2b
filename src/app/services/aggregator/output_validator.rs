//! Hard invariant checks on the produced matrix
//!
//! A correctness self-check over the aggregator's own output, not a
//! user-facing format opinion. Any violation is an aggregation bug and is
//! always fatal; it is never recovered from or downgraded to a warning.

use crate::app::models::OutputMatrix;
use crate::{Error, Result};

/// Validate the produced matrix, failing on the first violation
///
/// Checked invariants, in row order:
/// - Total Observations and every per-species cell are non-negative
/// - Cumulative Observations, Cumulative New Unique Organisms, and
///   Cumulative Unique Species never decrease between consecutive rows
/// - Rows are in strictly ascending date order
pub fn validate_output(matrix: &OutputMatrix) -> Result<()> {
    let mut previous: Option<&crate::app::models::OutputRow> = None;

    for (index, row) in matrix.rows.iter().enumerate() {
        if row.total_observations < 0 {
            return Err(Error::output_invariant(
                index,
                format!(
                    "negative Total Observations ({}) on {}",
                    row.total_observations, row.date
                ),
            ));
        }

        for (taxon, &value) in &row.species {
            if value < 0 {
                return Err(Error::output_invariant(
                    index,
                    format!("negative cell for '{}' ({}) on {}", taxon, value, row.date),
                ));
            }
        }

        if let Some(prev) = previous {
            if row.date <= prev.date {
                return Err(Error::output_invariant(
                    index,
                    format!("date order violated: {} follows {}", row.date, prev.date),
                ));
            }

            if row.cumulative_observations < prev.cumulative_observations {
                return Err(Error::output_invariant(
                    index,
                    format!(
                        "Cumulative Observations decreased from {} to {}",
                        prev.cumulative_observations, row.cumulative_observations
                    ),
                ));
            }

            if row.cumulative_new_unique < prev.cumulative_new_unique {
                return Err(Error::output_invariant(
                    index,
                    format!(
                        "Cumulative New Unique Organisms decreased from {} to {}",
                        prev.cumulative_new_unique, row.cumulative_new_unique
                    ),
                ));
            }

            if row.cumulative_unique_species < prev.cumulative_unique_species {
                return Err(Error::output_invariant(
                    index,
                    format!(
                        "Cumulative Unique Species decreased from {} to {}",
                        prev.cumulative_unique_species, row.cumulative_unique_species
                    ),
                ));
            }
        }

        previous = Some(row);
    }

    Ok(())
}
