//! CLI module for the product catalog
//!
//! Provides command-line interface for:
//! - serve: Open the record store and run the HTTP server
//! - openapi: Emit the generated interface description

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{openapi, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command.
///
/// A `.env` file in the working directory, if present, is loaded first so
/// its values feed the environment-backed flags.
pub async fn run() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse_args();
    run_command(cli.command).await
}
