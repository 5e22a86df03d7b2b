//! The validate command: score a raw log against the expected schema
//!
//! Runs the parser and the advisory input validator only, without
//! converting. Useful for checking annotation-tool export settings before
//! a batch run.

use colored::Colorize;

use crate::app::services::input_validator::{validate_input, RowStatus, ValidationReport};
use crate::app::services::raw_csv_parser::RawCsvParser;
use crate::cli::args::{ReportFormat, ValidateArgs};
use crate::{Error, Result};

/// Run schema validation from the CLI
pub async fn run(args: ValidateArgs) -> Result<()> {
    let csv_text = std::fs::read_to_string(&args.input_path).map_err(|e| {
        Error::io(
            format!("failed to read input file {}", args.input_path.display()),
            e,
        )
    })?;

    let parse_result = RawCsvParser::new().parse_text(&csv_text)?;
    let report = validate_input(&parse_result.column_map, &parse_result.rows);

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::io_error(format!("failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
        ReportFormat::Text => print_text_report(&args, &report),
    }

    Ok(())
}

fn print_text_report(args: &ValidateArgs, report: &ValidationReport) {
    println!(
        "{} {}",
        "Validation report for".bold(),
        args.input_path.display()
    );

    let score = format!("{}%", report.format_compliance);
    let score = if report.format_compliance == 100 {
        score.green()
    } else if report.format_compliance >= 75 {
        score.yellow()
    } else {
        score.red()
    };
    println!("Format compliance: {}", score);

    println!("\nColumns:");
    for check in &report.column_validation {
        let marker = if check.present {
            "present".green()
        } else {
            "missing".red()
        };
        match &check.note {
            Some(note) => println!("  {:40} {} ({})", check.column, marker, note),
            None => println!("  {:40} {}", check.column, marker),
        }
    }

    let flagged: Vec<_> = report
        .data_validation
        .iter()
        .filter(|check| check.status != RowStatus::Pass)
        .collect();
    if !flagged.is_empty() {
        println!("\nSampled row issues:");
        for check in flagged {
            let status = match check.status {
                RowStatus::Pass => "pass".green(),
                RowStatus::Warn => "warn".yellow(),
                RowStatus::Fail => "fail".red(),
            };
            println!("  row {:>4} [{}]: {}", check.row_number, status, check.issues.join("; "));
        }
    }

    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &report.recommendations {
            println!("  - {}", recommendation);
        }
    }
}
