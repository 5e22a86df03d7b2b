//! Date partitioning and per-taxon value folding
//!
//! One pass over the resolved rows builds a bucket per calendar date.
//! Duplicate dates (including duplicates across source files) merge
//! naturally here; rows whose adjusted timestamp could not be parsed are
//! excluded and reported back for warning-level logging.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::app::models::AggregationMode;
use crate::app::services::row_processor::ResolvedRow;

/// Mutable accumulator for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    /// The calendar date this bucket accumulates
    pub date: NaiveDate,

    /// Count of observation events recorded this date
    pub total_observations: i64,

    /// Per-taxon accumulated value (mode-specific: max quantity or count)
    species: HashMap<String, i64>,
}

impl DailyBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_observations: 0,
            species: HashMap::new(),
        }
    }

    /// Fold one row into the bucket under the mode-specific combine rule
    fn fold_row(&mut self, taxon: &str, quantity: i64, mode: AggregationMode) {
        self.total_observations += 1;

        let entry = self.species.entry(taxon.to_string()).or_insert(0);
        match mode {
            AggregationMode::Nmax => *entry = (*entry).max(quantity),
            AggregationMode::Obvs => *entry += 1,
        }
    }

    /// Accumulated value for a taxon (0 when unseen this date)
    pub fn species_value(&self, taxon: &str) -> i64 {
        self.species.get(taxon).copied().unwrap_or(0)
    }

    /// The per-taxon value map for this date
    pub fn species(&self) -> &HashMap<String, i64> {
        &self.species
    }

    /// Taxa with a non-zero value this date (the date's active set)
    pub fn active_taxa(&self) -> impl Iterator<Item = &str> {
        self.species
            .iter()
            .filter(|(_, &value)| value > 0)
            .map(|(taxon, _)| taxon.as_str())
    }
}

/// Result of partitioning rows by date
#[derive(Debug, Clone)]
pub struct PartitionResult {
    /// Buckets keyed by date; BTreeMap iteration gives ascending order
    pub buckets: BTreeMap<NaiveDate, DailyBucket>,

    /// Taxon column order: first-seen order across the whole input
    pub taxa_order: Vec<String>,

    /// 1-based numbers of rows excluded for an unusable timestamp
    pub undated_rows: Vec<usize>,
}

/// Partition resolved rows into per-date buckets
pub fn partition_by_date(rows: &[ResolvedRow], mode: AggregationMode) -> PartitionResult {
    let mut buckets: BTreeMap<NaiveDate, DailyBucket> = BTreeMap::new();
    let mut taxa_order: Vec<String> = Vec::new();
    let mut undated_rows = Vec::new();

    for (index, resolved) in rows.iter().enumerate() {
        let Some(date) = resolved.row.observation_date() else {
            undated_rows.push(index + 1);
            debug!("Row {}: unusable timestamp, excluded from aggregation", index + 1);
            continue;
        };

        if !taxa_order.iter().any(|t| t == &resolved.taxon) {
            taxa_order.push(resolved.taxon.clone());
        }

        buckets
            .entry(date)
            .or_insert_with(|| DailyBucket::new(date))
            .fold_row(&resolved.taxon, resolved.row.quantity, mode);
    }

    PartitionResult {
        buckets,
        taxa_order,
        undated_rows,
    }
}
