//! Unit tests for row processing statistics

use crate::app::services::row_processor::stats::ProcessingStats;

/// Test empty statistics report a zero survival rate safely
#[test]
fn test_empty_stats() {
    let stats = ProcessingStats::new();
    assert_eq!(stats.total_input, 0);
    assert_eq!(stats.survival_rate(), 0.0);
}

/// Test survival rate reflects kept vs input rows
#[test]
fn test_survival_rate() {
    let stats = ProcessingStats {
        total_input: 10,
        quality_filtered_out: 3,
        unresolved_taxa: 2,
        resolved: 5,
    };

    assert_eq!(stats.survival_rate(), 50.0);
}

/// Test summary string includes the pipeline counts
#[test]
fn test_summary_contents() {
    let stats = ProcessingStats {
        total_input: 4,
        quality_filtered_out: 1,
        unresolved_taxa: 1,
        resolved: 2,
    };

    let summary = stats.summary();
    assert!(summary.contains("4 -> 2"));
    assert!(summary.contains("filtered: 1"));
    assert!(summary.contains("unresolved taxa: 1"));
}
