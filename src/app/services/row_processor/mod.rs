//! Row processing pipeline: quality filtering and taxon resolution
//!
//! Sits between the raw parser and the aggregator. Filtering and
//! resolution are per-row and recoverable: a row that fails a threshold
//! or resolves to no taxon is dropped and counted, never fatal.

pub mod quality_filter;
pub mod stats;
pub mod taxon;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use quality_filter::{apply_quality_filters, passes_quality_filters};
pub use stats::ProcessingStats;
pub use taxon::{choose_taxon_label, resolve_taxa, ResolvedRow};
