//! The convert command: raw log file in, summary matrix file out

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared;
use crate::app::services::reporter::ReporterEvent;
use crate::cli::args::{ConvertArgs, Mode};
use crate::converter::Converter;
use crate::{Error, Result};

/// Run a conversion from the CLI
pub async fn run(args: ConvertArgs, cancellation_token: CancellationToken) -> Result<()> {
    let csv_text = std::fs::read_to_string(&args.input_path).map_err(|e| {
        Error::io(
            format!("failed to read input file {}", args.input_path.display()),
            e,
        )
    })?;

    let mut converter = Converter::new().with_cancellation_token(cancellation_token);

    let progress_bar = if args.quiet {
        None
    } else {
        Some(shared::create_progress_bar())
    };

    if let Some(pb) = &progress_bar {
        let pb = pb.clone();
        converter.set_progress_callback(Box::new(move |event| {
            if let ReporterEvent::Progress(update) = event {
                pb.set_position(update.percent as u64);
                pb.set_message(update.step_name.clone());
            }
        }));
    }

    let options = args.to_options();
    let result = match args.mode {
        Mode::Nmax => converter.convert_raw_to_nmax(&csv_text, &options).await,
        Mode::Obvs => converter.convert_raw_to_obvs(&csv_text, &options).await,
    };

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    if !result.success {
        let message = result
            .error
            .clone()
            .unwrap_or_else(|| "conversion failed".to_string());
        eprintln!("Conversion failed: {}", message);
        for entry in result.error_logs() {
            eprintln!("  [{}ms] {}: {}", entry.elapsed_ms, entry.step_name, entry.message);
        }
        return Err(Error::data_validation(message));
    }

    let output_path = args.resolved_output_path();
    let csv_out = result.to_csv()?;
    std::fs::write(&output_path, csv_out).map_err(|e| {
        Error::io(
            format!("failed to write output file {}", output_path.display()),
            e,
        )
    })?;
    info!("Wrote summary matrix to {}", output_path.display());

    shared::print_summary(&result, &output_path);

    if args.show_log {
        println!();
        shared::print_log(&result.logs);
    }

    Ok(())
}
