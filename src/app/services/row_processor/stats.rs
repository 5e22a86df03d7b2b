//! Processing statistics for the row filtering and resolution pipeline

/// Statistics for row processing operations
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessingStats {
    /// Total number of parsed input rows
    pub total_input: usize,

    /// Number of rows removed by quality/confidence filtering
    pub quality_filtered_out: usize,

    /// Number of rows with no resolvable taxon identity
    pub unresolved_taxa: usize,

    /// Number of rows that survived filtering and resolution
    pub resolved: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate survival rate as a percentage of input rows
    pub fn survival_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.resolved as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Row processing: {} -> {} rows ({:.1}% kept) | \
             filtered: {} | unresolved taxa: {}",
            self.total_input,
            self.resolved,
            self.survival_rate(),
            self.quality_filtered_out,
            self.unresolved_taxa
        )
    }
}
