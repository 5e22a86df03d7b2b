//! Advisory input-format validation
//!
//! Scores how well a parsed file matches the expected raw observation
//! schema. The report is attached to the conversion result for the
//! caller's inspection and never blocks conversion: bad structure lowers
//! the compliance score and populates recommendations, nothing more.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::raw_csv_parser::ColumnMap;
use crate::app::models::RawObservationRow;
use crate::app::services::row_processor::choose_taxon_label;
use crate::constants::{raw_columns, VALIDATION_SAMPLE_ROWS};

/// Presence check for one expected column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnCheck {
    /// Expected column name
    pub column: String,

    /// Whether the column was found in the input header
    pub present: bool,

    /// Explanatory note, e.g. for optional-but-recommended columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Status of one sampled data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Pass,
    Warn,
    Fail,
}

/// Validation outcome for one sampled data row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowCheck {
    /// 1-based data row number
    pub row_number: usize,

    /// Overall status for the row
    pub status: RowStatus,

    /// Concrete issues found in the row
    pub issues: Vec<String>,
}

/// Advisory input-format compliance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Per expected column: present/missing with notes
    pub column_validation: Vec<ColumnCheck>,

    /// Per sampled row: status and issues
    pub data_validation: Vec<RowCheck>,

    /// Percentage of expected columns present, 0-100
    pub format_compliance: u8,

    /// Rule-triggered free-text recommendations
    pub recommendations: Vec<String>,
}

impl ValidationReport {
    /// True when every expected column is present
    pub fn is_fully_compliant(&self) -> bool {
        self.format_compliance == 100
    }

    /// Number of sampled rows that failed validation
    pub fn failed_row_count(&self) -> usize {
        self.data_validation
            .iter()
            .filter(|check| check.status == RowStatus::Fail)
            .count()
    }
}

/// Validate parsed headers and a sample of rows against the raw schema
///
/// Samples the first [`VALIDATION_SAMPLE_ROWS`] rows; enough to catch
/// systemic issues without a second full pass over large inputs.
pub fn validate_input(column_map: &ColumnMap, rows: &[RawObservationRow]) -> ValidationReport {
    let column_validation = check_columns(column_map);
    let data_validation = check_rows(column_map, rows);
    let recommendations = build_recommendations(column_map, &data_validation);

    let present = column_validation.iter().filter(|c| c.present).count();
    let format_compliance =
        ((present as f64 / raw_columns::EXPECTED.len() as f64) * 100.0).round() as u8;

    debug!(
        "Input validation: {}% compliant, {} of {} sampled rows failed",
        format_compliance,
        data_validation
            .iter()
            .filter(|c| c.status == RowStatus::Fail)
            .count(),
        data_validation.len()
    );

    ValidationReport {
        column_validation,
        data_validation,
        format_compliance,
        recommendations,
    }
}

/// Check each expected column for presence
fn check_columns(column_map: &ColumnMap) -> Vec<ColumnCheck> {
    raw_columns::EXPECTED
        .iter()
        .map(|&column| {
            let present = column_map.has_column(column);
            let note = if !present && raw_columns::OPTIONAL.contains(&column) {
                Some("optional column; recommended for quality filtering".to_string())
            } else if !present {
                Some("required by the raw schema".to_string())
            } else {
                None
            };

            ColumnCheck {
                column: column.to_string(),
                present,
                note,
            }
        })
        .collect()
}

/// Check a leading sample of rows for concrete data issues
fn check_rows(column_map: &ColumnMap, rows: &[RawObservationRow]) -> Vec<RowCheck> {
    rows.iter()
        .take(VALIDATION_SAMPLE_ROWS)
        .enumerate()
        .map(|(index, row)| {
            let mut issues = Vec::new();
            let mut failed = false;

            if row.adjusted_timestamp.is_none() {
                issues.push("unparsable or missing adjusted date and time".to_string());
                failed = true;
            }

            if choose_taxon_label(row).is_none() {
                issues.push("both common and scientific name fields are empty".to_string());
                failed = true;
            }

            if column_map.has_column(raw_columns::CONFIDENCE) && row.confidence.is_none() {
                issues.push("confidence level cell is empty or non-numeric".to_string());
            }

            if column_map.has_column(raw_columns::VIDEO_QUALITY) && row.video_quality.is_none() {
                issues.push("quality of video cell is empty or non-numeric".to_string());
            }

            if row.quantity == 0 {
                issues.push("quantity is zero (missing, non-numeric, or clamped)".to_string());
            }

            let status = if failed {
                RowStatus::Fail
            } else if issues.is_empty() {
                RowStatus::Pass
            } else {
                RowStatus::Warn
            };

            RowCheck {
                row_number: index + 1,
                status,
                issues,
            }
        })
        .collect()
}

/// Build rule-triggered recommendations from structural findings
fn build_recommendations(column_map: &ColumnMap, row_checks: &[RowCheck]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !column_map.has_column(raw_columns::CONFIDENCE) {
        recommendations.push(
            "Confidence Level column missing: confidence filtering will be a no-op".to_string(),
        );
    }

    if !column_map.has_column(raw_columns::VIDEO_QUALITY) {
        recommendations.push(
            "Quality of Video column missing: video-quality filtering will be a no-op".to_string(),
        );
    }

    if !column_map.has_column(raw_columns::ADJUSTED_DATETIME) {
        recommendations.push(
            "Adjusted Date and Time column missing: no rows can be assigned to a date, \
             conversion will fail with a no-data error"
                .to_string(),
        );
    }

    if !column_map.has_column(raw_columns::SCIENTIFIC_NAME) {
        recommendations.push(
            "Lowest Order Scientific Name column missing: taxa will resolve through \
             common names only, weakening cross-file joins"
                .to_string(),
        );
    }

    let failed = row_checks
        .iter()
        .filter(|check| check.status == RowStatus::Fail)
        .count();
    if !row_checks.is_empty() && failed * 2 > row_checks.len() {
        recommendations.push(format!(
            "{} of {} sampled rows failed validation: check export settings for \
             timestamp format and taxon columns",
            failed,
            row_checks.len()
        ));
    }

    recommendations
}
