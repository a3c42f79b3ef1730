//! Entry point for the `loadwise` command-line interface.
#![forbid(unsafe_code)]

use loadwise_cli::CliError;

fn main() -> eyre::Result<()> {
    match loadwise_cli::run() {
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        outcome => outcome.map_err(eyre::Report::from),
    }
}
