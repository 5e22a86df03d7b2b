//! Cumulative species-discovery pass
//!
//! Threads an explicit accumulator through the date buckets in ascending
//! order. The state is allocated fresh per aggregation and owned by the
//! fold, never shared or ambient, so per-call isolation holds by
//! construction.

use std::collections::HashSet;

use super::buckets::DailyBucket;
use crate::app::models::OutputRow;

/// Running discovery state carried across the sorted date sequence
#[derive(Debug, Clone, Default)]
pub struct DiscoveryState {
    /// Taxa seen on any prior date (by active, non-zero value)
    seen: HashSet<String>,

    /// Running sum of per-date total observations
    cumulative_observations: i64,

    /// Running sum of per-date newly seen taxa
    cumulative_new_unique: i64,
}

impl DiscoveryState {
    /// Create an empty state (start of an aggregation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state over one date bucket, producing its output row
    ///
    /// Only taxa with a non-zero value count as observed today; a taxon
    /// whose peak quantity is 0 neither counts as unique today nor enters
    /// the seen set.
    pub fn advance(&mut self, bucket: &DailyBucket) -> OutputRow {
        let active: Vec<&str> = bucket.active_taxa().collect();

        let new_today = active
            .iter()
            .filter(|taxon| !self.seen.contains(**taxon))
            .count() as i64;

        for taxon in &active {
            self.seen.insert((*taxon).to_string());
        }

        self.cumulative_observations += bucket.total_observations;
        self.cumulative_new_unique += new_today;

        OutputRow {
            date: bucket.date,
            total_observations: bucket.total_observations,
            cumulative_observations: self.cumulative_observations,
            unique_today: active.len() as i64,
            new_unique_today: new_today,
            cumulative_new_unique: self.cumulative_new_unique,
            cumulative_unique_species: self.seen.len() as i64,
            species: bucket.species().clone(),
        }
    }

    /// Number of distinct taxa seen so far
    pub fn species_seen(&self) -> usize {
        self.seen.len()
    }
}

/// Fold date buckets (ascending order) into output rows
pub fn fold_buckets<'a>(buckets: impl Iterator<Item = &'a DailyBucket>) -> Vec<OutputRow> {
    let mut state = DiscoveryState::new();
    buckets.map(|bucket| state.advance(bucket)).collect()
}
