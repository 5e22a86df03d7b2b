//! Shared CLI presentation helpers: progress bar and log rendering

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app::services::reporter::{LogEntry, LogLevel};
use crate::converter::ConversionResult;

/// Create the percent-based conversion progress bar
pub fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% | {msg}")
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    pb.set_message("Starting conversion");
    pb
}

/// Print a colored summary of a successful conversion
pub fn print_summary(result: &ConversionResult, output_path: &std::path::Path) {
    let Some(metadata) = &result.metadata else {
        return;
    };

    println!("{}", "Conversion complete".green().bold());
    println!("  Input rows:      {}", metadata.input_rows);
    println!("  Output dates:    {}", metadata.output_rows);
    if let Some(matrix) = &result.data {
        println!("  Taxa:            {}", matrix.taxon_count());
    }
    if let Some(validation) = &result.validation {
        let score = format!("{}%", validation.format_compliance);
        let score = if validation.format_compliance == 100 {
            score.green()
        } else {
            score.yellow()
        };
        println!("  Format score:    {}", score);
        for recommendation in &validation.recommendations {
            println!("  {} {}", "note:".yellow(), recommendation);
        }
    }
    println!("  Elapsed:         {}ms", metadata.processing_time_ms);
    println!("  Written to:      {}", output_path.display());
}

/// Print log entries with colored levels
pub fn print_log(entries: &[LogEntry]) {
    for entry in entries {
        let level = match entry.level {
            LogLevel::Info => "INFO".normal(),
            LogLevel::Success => "SUCCESS".green(),
            LogLevel::Warning => "WARNING".yellow(),
            LogLevel::Error => "ERROR".red().bold(),
        };
        println!(
            "[{:>6}ms] {:7} step {} ({}): {}",
            entry.elapsed_ms, level, entry.step, entry.step_name, entry.message
        );
    }
}
