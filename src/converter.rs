//! Conversion façade: raw log text in, daily summary matrix out
//!
//! One logical call per conversion, performing sequential passes over the
//! row set: parse, advisory input validation, quality filtering, taxon
//! resolution, aggregation, output invariant validation, and result
//! assembly. Between stages control is yielded back to the caller's event
//! loop so progress events can be observed, and a cooperative cancellation
//! token is checked; neither changes ordering or results.
//!
//! No mutable state is shared across calls: buckets and discovery state
//! are allocated fresh per call. The reporter is shared per converter
//! instance, so two overlapping in-flight calls on one converter would
//! interleave log streams; callers wanting isolation use one converter
//! per call.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::app::models::{AggregationMode, OutputMatrix};
use crate::app::services::aggregator::{aggregate, validate_output};
use crate::app::services::csv_writer::data_to_csv;
use crate::app::services::input_validator::{validate_input, ValidationReport};
use crate::app::services::raw_csv_parser::RawCsvParser;
use crate::app::services::reporter::{ConversionReporter, EventCallback, LogEntry, LogLevel};
use crate::app::services::row_processor::{apply_quality_filters, resolve_taxa, ProcessingStats};
use crate::config::ConvertOptions;
use crate::constants::steps::{self, StepDef};
use crate::{Error, Result};

/// Metadata about one completed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionMetadata {
    /// Number of raw rows parsed from the input
    pub input_rows: usize,

    /// Number of date rows in the output matrix
    pub output_rows: usize,

    /// Wall-clock duration of the conversion call
    pub processing_time_ms: u64,

    /// Number of pipeline steps executed
    pub conversion_steps: u32,
}

/// Result of one conversion call
///
/// On success `data`, `metadata`, and `validation` are populated; on
/// failure `error` carries the message and the partial log is retained
/// either way.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Whether the conversion completed
    pub success: bool,

    /// The produced matrix (success only)
    pub data: Option<OutputMatrix>,

    /// Conversion metadata (success only)
    pub metadata: Option<ConversionMetadata>,

    /// Advisory input-format report (success only; never blocks conversion)
    pub validation: Option<ValidationReport>,

    /// Fatal error message (failure only)
    pub error: Option<String>,

    /// Full ordered log of the call, retained on success and failure
    pub logs: Vec<LogEntry>,
}

impl ConversionResult {
    /// Error-level log entries, for surfacing on fatal failure
    pub fn error_logs(&self) -> Vec<&LogEntry> {
        self.logs
            .iter()
            .filter(|entry| entry.level == LogLevel::Error)
            .collect()
    }

    /// Render the produced matrix to CSV text
    pub fn to_csv(&self) -> Result<String> {
        let matrix = self
            .data
            .as_ref()
            .ok_or_else(|| Error::data_validation("conversion produced no data to serialize"))?;
        data_to_csv(matrix)
    }
}

/// Converter for raw observation logs
///
/// Owns the reporter for its lifetime; register a progress callback
/// before calling either entry point. Do not share one converter between
/// two overlapping in-flight calls.
#[derive(Debug)]
pub struct Converter {
    reporter: ConversionReporter,
    cancellation: CancellationToken,
}

impl Converter {
    /// Create a converter with no subscriber and no cancellation source
    pub fn new() -> Self {
        Self {
            reporter: ConversionReporter::new(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Use an external cancellation token, checked between stages
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Register the single progress/log event subscriber
    pub fn set_progress_callback(&mut self, callback: EventCallback) {
        self.reporter.set_callback(callback);
    }

    /// Convert raw log text into the Nmax daily summary matrix
    ///
    /// Per (date, taxon) the cell is the maximum event quantity: peak
    /// simultaneous abundance.
    pub async fn convert_raw_to_nmax(
        &mut self,
        csv_text: &str,
        options: &ConvertOptions,
    ) -> ConversionResult {
        self.convert(csv_text, options, AggregationMode::Nmax).await
    }

    /// Convert raw log text into the Obvs daily summary matrix
    ///
    /// Per (date, taxon) the cell is the count of observation events:
    /// detection frequency, ignoring magnitude.
    pub async fn convert_raw_to_obvs(
        &mut self,
        csv_text: &str,
        options: &ConvertOptions,
    ) -> ConversionResult {
        self.convert(csv_text, options, AggregationMode::Obvs).await
    }

    async fn convert(
        &mut self,
        csv_text: &str,
        options: &ConvertOptions,
        mode: AggregationMode,
    ) -> ConversionResult {
        self.reporter.reset();
        info!("Starting {} conversion", mode);

        match self.run_pipeline(csv_text, options, mode).await {
            Ok((matrix, validation, input_rows)) => {
                let metadata = ConversionMetadata {
                    input_rows,
                    output_rows: matrix.row_count(),
                    processing_time_ms: self.reporter.elapsed_ms(),
                    conversion_steps: steps::COUNT,
                };

                info!(
                    "{} conversion complete: {} input rows -> {} dates in {}ms",
                    mode, metadata.input_rows, metadata.output_rows, metadata.processing_time_ms
                );

                ConversionResult {
                    success: true,
                    data: Some(matrix),
                    metadata: Some(metadata),
                    validation: Some(validation),
                    error: None,
                    logs: self.reporter.logs(),
                }
            }
            Err(e) => {
                self.reporter.error(e.to_string());
                error!("{} conversion failed: {}", mode, e);

                ConversionResult {
                    success: false,
                    data: None,
                    metadata: None,
                    validation: None,
                    error: Some(e.to_string()),
                    logs: self.reporter.logs(),
                }
            }
        }
    }

    async fn run_pipeline(
        &mut self,
        csv_text: &str,
        options: &ConvertOptions,
        mode: AggregationMode,
    ) -> Result<(OutputMatrix, ValidationReport, usize)> {
        options.validate()?;

        // Step 1: parse
        self.enter_step(steps::PARSE).await?;
        let parse_result = RawCsvParser::new().parse_text(csv_text)?;
        for parse_error in &parse_result.stats.errors {
            self.reporter.warning(parse_error.clone());
        }
        self.finish_step(steps::PARSE, parse_result.stats.summary());

        // Step 2: advisory input validation (never blocks conversion)
        self.enter_step(steps::VALIDATE_INPUT).await?;
        let validation = validate_input(&parse_result.column_map, &parse_result.rows);
        if !validation.is_fully_compliant() {
            self.reporter.warning(format!(
                "input format compliance {}% ({} recommendation(s))",
                validation.format_compliance,
                validation.recommendations.len()
            ));
        }
        self.finish_step(
            steps::VALIDATE_INPUT,
            format!("format compliance: {}%", validation.format_compliance),
        );

        // Step 3: quality filtering
        self.enter_step(steps::QUALITY_FILTER).await?;
        let mut processing_stats = ProcessingStats::new();
        processing_stats.total_input = parse_result.rows.len();
        let input_rows = parse_result.rows.len();
        let filtered = apply_quality_filters(parse_result.rows, options, &mut processing_stats);
        if processing_stats.quality_filtered_out > 0 {
            self.reporter.warning(format!(
                "{} row(s) below configured quality thresholds, excluded",
                processing_stats.quality_filtered_out
            ));
        }
        self.finish_step(
            steps::QUALITY_FILTER,
            format!("{} of {} rows kept", filtered.len(), input_rows),
        );

        // Step 4: taxon resolution
        self.enter_step(steps::RESOLVE_TAXA).await?;
        let (resolved, dropped_rows) = resolve_taxa(filtered, &mut processing_stats);
        for row_number in &dropped_rows {
            self.reporter.warning(format!(
                "row {}: no resolvable taxon (empty scientific and common name), excluded",
                row_number
            ));
        }
        self.finish_step(steps::RESOLVE_TAXA, processing_stats.summary());

        // Step 5: aggregation
        self.enter_step(steps::AGGREGATE).await?;
        let outcome = aggregate(&resolved, mode)?;
        for row_number in &outcome.undated_rows {
            self.reporter.warning(format!(
                "row {}: unparsable adjusted date and time, excluded from aggregation",
                row_number
            ));
        }
        if !outcome.undated_rows.is_empty() {
            warn!(
                "{} row(s) excluded for unusable timestamps",
                outcome.undated_rows.len()
            );
        }
        self.finish_step(
            steps::AGGREGATE,
            format!(
                "{} dates x {} taxa",
                outcome.matrix.row_count(),
                outcome.matrix.taxon_count()
            ),
        );

        // Step 6: output invariant validation (fatal on violation)
        self.enter_step(steps::VALIDATE_OUTPUT).await?;
        validate_output(&outcome.matrix)?;
        self.finish_step(steps::VALIDATE_OUTPUT, "all invariants hold".to_string());

        // Step 7: result assembly
        self.enter_step(steps::ASSEMBLE).await?;
        self.finish_step(
            steps::ASSEMBLE,
            format!("{} output row(s) assembled", outcome.matrix.row_count()),
        );

        Ok((outcome.matrix, validation, input_rows))
    }

    /// Enter a pipeline step: check cancellation, yield to the caller's
    /// event loop, and log the step start
    async fn enter_step(&mut self, (step, step_name, _): StepDef) -> Result<()> {
        if self.cancellation.is_cancelled() {
            return Err(Error::cancelled(step_name));
        }

        // Cooperative yield so subscribers can render progress between
        // stages; never changes ordering or results
        tokio::task::yield_now().await;

        self.reporter.begin_step(step, step_name);
        Ok(())
    }

    /// Finish a pipeline step: log Success and advance progress
    fn finish_step(&mut self, (_, _, percent): StepDef, message: String) {
        self.reporter.success(message);
        self.reporter.progress(percent);
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
