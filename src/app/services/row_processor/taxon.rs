//! Taxon identity resolution for observation rows
//!
//! Picks one identity label per raw row. The scientific name always wins
//! over the common name: scientific names are the canonical cross-file
//! join key used by downstream merge tooling, so the priority order is a
//! domain policy, not a fallback of convenience.

use tracing::debug;

use super::stats::ProcessingStats;
use crate::app::models::RawObservationRow;
use crate::app::services::raw_csv_parser::field_parsers::normalize_text;

/// A raw row paired with its resolved taxon label
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    /// The underlying observation row
    pub row: RawObservationRow,

    /// Resolved taxon label (scientific name when available, else common)
    pub taxon: String,
}

/// Choose the taxon label for a row
///
/// Returns the scientific-name field if non-empty after normalization,
/// otherwise the common-name field if non-empty, otherwise `None`. A row
/// resolving to `None` is excluded from all aggregation and does not count
/// toward any total.
pub fn choose_taxon_label(row: &RawObservationRow) -> Option<String> {
    let scientific = normalize_text(&row.scientific_name);
    if !scientific.is_empty() {
        return Some(scientific);
    }

    let common = normalize_text(&row.common_name);
    if !common.is_empty() {
        return Some(common);
    }

    None
}

/// Resolve taxa for a batch of rows, dropping rows with no identity
///
/// Returns surviving rows in input order with their labels. Unresolvable
/// rows are counted in `stats` and the 1-based numbers of the dropped
/// rows are returned for warning-level reporting by the caller.
pub fn resolve_taxa(
    rows: Vec<RawObservationRow>,
    stats: &mut ProcessingStats,
) -> (Vec<ResolvedRow>, Vec<usize>) {
    let mut resolved = Vec::with_capacity(rows.len());
    let mut dropped_rows = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match choose_taxon_label(&row) {
            Some(taxon) => resolved.push(ResolvedRow { row, taxon }),
            None => {
                stats.unresolved_taxa += 1;
                dropped_rows.push(index + 1);
                debug!("Row {}: no resolvable taxon, excluded", index + 1);
            }
        }
    }

    stats.resolved = resolved.len();
    (resolved, dropped_rows)
}
