//! Command-line interface for the Loadwise load optimiser.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod optimise;

pub use error::CliError;
use optimise::{OptimiseArgs, run_optimise};

const ARG_REQUEST: &str = "request";
const ARG_OUTPUT: &str = "output";
const ENV_REQUEST: &str = "LOADWISE_CMDS_OPTIMISE_REQUEST_PATH";

/// Run the Loadwise CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, request
/// loading, planning or writing the plan fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimise(args) => run_optimise(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "loadwise",
    about = "Choose the best-paying compatible load for a truck",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a load from a JSON request.
    Optimise(OptimiseArgs),
}

#[cfg(test)]
mod tests;
