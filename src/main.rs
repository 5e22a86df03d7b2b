use clap::Parser;
use std::process;
use subcam_processor::cli::{args::Args, commands};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Logging goes to stderr so it never mixes with report output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel the in-flight conversion when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(subcam_processor::Error::cancelled("interrupted by user"))
            }
        }
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Subcam Processor - Observation Log Converter");
    println!("============================================");
    println!();
    println!("Convert subsea camera observation event logs into standardized daily");
    println!("Nmax and Obvs summary matrices for downstream reporting tools.");
    println!();
    println!("USAGE:");
    println!("    subcam-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a raw observation log to a summary matrix (main command)");
    println!("    validate    Score a raw log against the expected schema without converting");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Produce the Nmax matrix (peak simultaneous individuals per day):");
    println!("    subcam-processor convert dives.csv");
    println!();
    println!("    # Produce the Obvs matrix with quality filtering:");
    println!("    subcam-processor convert dives.csv --mode obvs --min-confidence 4");
    println!();
    println!("    # Check export settings before a batch run:");
    println!("    subcam-processor validate dives.csv --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    subcam-processor <COMMAND> --help");
}
