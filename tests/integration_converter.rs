//! Integration tests for the full conversion pipeline
//!
//! These tests drive the public converter entry points over synthetic
//! observation logs and verify the end-to-end contract: matrix values,
//! cumulative statistics, result metadata, validation reports, and the
//! log/progress event stream.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use subcam_processor::app::services::reporter::{LogLevel, ReporterEvent};
use subcam_processor::{AggregationMode, ConvertOptions, Converter};
use tokio_util::sync::CancellationToken;

const HEADER: &str = "File Name,Timestamps (HH:MM:SS),Adjusted Date and Time,\
Event Observation,Quantity (Nmax),Common Name,Lowest Order Scientific Name,\
Confidence Level,Quality of Video";

fn log_line(
    adjusted: &str,
    quantity: i64,
    common: &str,
    scientific: &str,
    confidence: &str,
    quality: &str,
) -> String {
    format!(
        "dive_042.mp4,00:14:07,{adjusted},event,{quantity},{common},{scientific},{confidence},{quality}"
    )
}

fn sample_log() -> String {
    [
        HEADER.to_string(),
        // Day 1: cod twice (3 then 5), redfish once
        log_line("2024-03-01 10:00:00", 3, "Atlantic cod", "Gadus morhua", "4", "3"),
        log_line("2024-03-01 11:30:00", 5, "Atlantic cod", "Gadus morhua", "5", "4"),
        log_line("2024-03-01 12:00:00", 1, "Redfish", "Sebastes norvegicus", "3", "3"),
        // Day 2: cod once, wolffish new
        log_line("2024-03-02 09:00:00", 2, "Atlantic cod", "Gadus morhua", "4", "4"),
        log_line("2024-03-02 14:00:00", 1, "Wolffish", "Anarhichas lupus", "5", "5"),
    ]
    .join("\n")
}

/// Test Nmax conversion end to end: per-cell maxima and cumulative stats
#[tokio::test]
async fn test_convert_nmax_end_to_end() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax(&sample_log(), &ConvertOptions::default())
        .await;

    assert!(result.success, "error: {:?}", result.error);
    let matrix = result.data.as_ref().unwrap();
    assert_eq!(matrix.mode, AggregationMode::Nmax);
    assert_eq!(matrix.row_count(), 2);
    assert_eq!(
        matrix.taxa,
        vec![
            "Gadus morhua".to_string(),
            "Sebastes norvegicus".to_string(),
            "Anarhichas lupus".to_string(),
        ]
    );

    let day1 = &matrix.rows[0];
    assert_eq!(day1.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(day1.species_value("Gadus morhua"), 5); // max(3, 5)
    assert_eq!(day1.species_value("Sebastes norvegicus"), 1);
    assert_eq!(day1.species_value("Anarhichas lupus"), 0);
    assert_eq!(day1.total_observations, 3);
    assert_eq!(day1.unique_today, 2);
    assert_eq!(day1.new_unique_today, 2);

    let day2 = &matrix.rows[1];
    assert_eq!(day2.cumulative_observations, 5);
    assert_eq!(day2.new_unique_today, 1);
    assert_eq!(day2.cumulative_unique_species, 3);
    assert_eq!(day2.cumulative_new_unique, 3);

    let metadata = result.metadata.as_ref().unwrap();
    assert_eq!(metadata.input_rows, 5);
    assert_eq!(metadata.output_rows, 2);
    assert_eq!(metadata.conversion_steps, 7);

    let validation = result.validation.as_ref().unwrap();
    assert_eq!(validation.format_compliance, 100);
}

/// Test Obvs conversion counts events instead of taking maxima
#[tokio::test]
async fn test_convert_obvs_counts_events() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_obvs(&sample_log(), &ConvertOptions::default())
        .await;

    assert!(result.success);
    let matrix = result.data.as_ref().unwrap();
    assert_eq!(matrix.rows[0].species_value("Gadus morhua"), 2); // two events
    assert_eq!(matrix.rows[0].species_value("Sebastes norvegicus"), 1);
    assert_eq!(matrix.rows[1].species_value("Gadus morhua"), 1);
}

/// Test cumulative observations never decrease across output rows
#[tokio::test]
async fn test_cumulative_observations_monotone() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax(&sample_log(), &ConvertOptions::default())
        .await;

    let matrix = result.data.unwrap();
    let mut previous = 0;
    for row in &matrix.rows {
        assert!(row.cumulative_observations >= previous);
        previous = row.cumulative_observations;
    }
}

/// Test empty input is a result-level failure, never a silent empty success
#[tokio::test]
async fn test_empty_input_fails_with_error() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax("", &ConvertOptions::default())
        .await;

    assert!(!result.success);
    assert!(result.data.is_none());
    let error = result.error.as_ref().unwrap();
    assert!(error.to_lowercase().contains("no data") || error.to_lowercase().contains("empty"));

    // The partial log is retained and carries an ERROR entry
    assert!(!result.logs.is_empty());
    assert!(result.logs.iter().any(|e| e.level == LogLevel::Error));
}

/// Test a header with no data rows fails the same way as empty input
#[tokio::test]
async fn test_header_only_input_fails() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax(&format!("{HEADER}\n"), &ConvertOptions::default())
        .await;

    assert!(!result.success);
    assert!(result.error.is_some());
}

/// Test confidence filtering excludes low rows while rows missing the
/// field entirely are retained
#[tokio::test]
async fn test_min_confidence_filtering() {
    let text = [
        HEADER.to_string(),
        // Below threshold: excluded
        log_line("2024-03-01 10:00:00", 3, "Atlantic cod", "Gadus morhua", "2", "3"),
        // At threshold: kept
        log_line("2024-03-01 11:00:00", 2, "Atlantic cod", "Gadus morhua", "4", "3"),
        // No confidence recorded: kept
        log_line("2024-03-01 12:00:00", 1, "Redfish", "Sebastes norvegicus", "", ""),
    ]
    .join("\n");

    let options = ConvertOptions::new().with_min_confidence(4);
    let mut converter = Converter::new();
    let result = converter.convert_raw_to_nmax(&text, &options).await;

    assert!(result.success);
    let matrix = result.data.unwrap();
    let day = &matrix.rows[0];
    // The quantity-3 cod event was filtered, so the max comes from the kept event
    assert_eq!(day.species_value("Gadus morhua"), 2);
    assert_eq!(day.species_value("Sebastes norvegicus"), 1);
    assert_eq!(day.total_observations, 2);

    // The exclusion surfaced as a warning in the log stream
    assert!(result
        .logs
        .iter()
        .any(|e| e.level == LogLevel::Warning && e.message.contains("quality thresholds")));
}

/// Test filtering that removes every row behaves like empty input
#[tokio::test]
async fn test_filtering_everything_fails_as_no_data() {
    let text = [
        HEADER.to_string(),
        log_line("2024-03-01 10:00:00", 3, "Atlantic cod", "Gadus morhua", "1", "1"),
    ]
    .join("\n");

    let options = ConvertOptions::new().with_min_confidence(5);
    let mut converter = Converter::new();
    let result = converter.convert_raw_to_nmax(&text, &options).await;

    assert!(!result.success);
    assert!(result.error.unwrap().to_lowercase().contains("no rows"));
}

/// Test rows with no resolvable taxon are excluded with warnings, and
/// rows with unparsable timestamps are excluded from aggregation
#[tokio::test]
async fn test_per_row_exclusions_are_warnings() {
    let text = [
        HEADER.to_string(),
        log_line("2024-03-01 10:00:00", 3, "Atlantic cod", "Gadus morhua", "4", "3"),
        log_line("2024-03-01 11:00:00", 2, "", "", "4", "3"), // no taxon
        log_line("garbage", 1, "Redfish", "Sebastes norvegicus", "4", "3"), // no date
    ]
    .join("\n");

    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax(&text, &ConvertOptions::default())
        .await;

    assert!(result.success);
    let matrix = result.data.unwrap();
    assert_eq!(matrix.row_count(), 1);
    assert_eq!(matrix.rows[0].total_observations, 1);

    let warnings: Vec<_> = result
        .logs
        .iter()
        .filter(|e| e.level == LogLevel::Warning)
        .collect();
    assert!(warnings.iter().any(|e| e.message.contains("no resolvable taxon")));
    assert!(warnings.iter().any(|e| e.message.contains("unparsable adjusted date")));
}

/// Test the registered callback sees monotone progress ending at 100
#[tokio::test]
async fn test_progress_stream_monotone() {
    let percents = Arc::new(Mutex::new(Vec::new()));
    let percents_clone = Arc::clone(&percents);

    let mut converter = Converter::new();
    converter.set_progress_callback(Box::new(move |event| {
        if let ReporterEvent::Progress(update) = event {
            percents_clone.lock().unwrap().push(update.percent);
        }
    }));

    let result = converter
        .convert_raw_to_nmax(&sample_log(), &ConvertOptions::default())
        .await;
    assert!(result.success);

    let percents = percents.lock().unwrap();
    assert!(!percents.is_empty());
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*percents.last().unwrap(), 100);
}

/// Test a pre-cancelled token fails the call before any work
#[tokio::test]
async fn test_cancelled_token_aborts() {
    let token = CancellationToken::new();
    token.cancel();

    let mut converter = Converter::new().with_cancellation_token(token);
    let result = converter
        .convert_raw_to_nmax(&sample_log(), &ConvertOptions::default())
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().to_lowercase().contains("cancelled"));
}

/// Test serializing then re-parsing reproduces identical date and numeric
/// cell values
#[tokio::test]
async fn test_csv_round_trip_stability() {
    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_nmax(&sample_log(), &ConvertOptions::default())
        .await;
    assert!(result.success);

    let matrix = result.data.as_ref().unwrap();
    let csv_text = result.to_csv().unwrap();

    // Write and re-read through the filesystem like a downstream tool would
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dives_nmax.csv");
    std::fs::write(&path, &csv_text).unwrap();
    let reloaded = std::fs::read_to_string(&path).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reloaded.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("Date"));
    assert_eq!(headers.len(), 7 + matrix.taxa.len());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), matrix.row_count());

    for (record, row) in records.iter().zip(&matrix.rows) {
        let date = NaiveDate::parse_from_str(record.get(0).unwrap(), "%Y-%m-%d").unwrap();
        assert_eq!(date, row.date);
        assert_eq!(
            record.get(1).unwrap().parse::<i64>().unwrap(),
            row.total_observations
        );
        for (offset, taxon) in matrix.taxa.iter().enumerate() {
            assert_eq!(
                record.get(7 + offset).unwrap().parse::<i64>().unwrap(),
                row.species_value(taxon)
            );
        }
    }
}

/// Test 1000 synthetic rows produce one output row per distinct date with
/// per-date totals summing to the row counts
#[tokio::test]
async fn test_large_synthetic_batch() {
    let taxa = [
        "Gadus morhua",
        "Sebastes norvegicus",
        "Anarhichas lupus",
        "Pleuronectes platessa",
    ];

    let mut lines = vec![HEADER.to_string()];
    for i in 0..1000 {
        let day = (i % 10) + 1;
        let taxon = taxa[i % taxa.len()];
        lines.push(log_line(
            &format!("2024-03-{:02} 10:{:02}:00", day, i % 60),
            ((i % 7) + 1) as i64,
            "",
            taxon,
            "4",
            "4",
        ));
    }
    let text = lines.join("\n");

    let mut converter = Converter::new();
    let result = converter
        .convert_raw_to_obvs(&text, &ConvertOptions::default())
        .await;

    assert!(result.success);
    let matrix = result.data.unwrap();
    assert_eq!(matrix.row_count(), 10);

    // 1000 rows spread evenly over 10 dates
    for row in &matrix.rows {
        assert_eq!(row.total_observations, 100);
    }
    assert_eq!(matrix.rows.last().unwrap().cumulative_observations, 1000);
    assert_eq!(matrix.rows.last().unwrap().cumulative_unique_species, 4);

    // Obvs cells per date sum to that date's total
    for row in &matrix.rows {
        let cell_sum: i64 = matrix.taxa.iter().map(|t| row.species_value(t)).sum();
        assert_eq!(cell_sum, row.total_observations);
    }
}
