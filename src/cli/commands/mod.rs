//! Command dispatch for the subcam processor CLI

pub mod convert;
pub mod shared;
pub mod validate;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Run the selected command with cancellation support
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    match args.command {
        Some(Commands::Convert(convert_args)) => {
            convert::run(convert_args, cancellation_token).await
        }
        Some(Commands::Validate(validate_args)) => validate::run(validate_args).await,
        None => Ok(()), // help was already shown by main
    }
}
