//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::catalog::SqlProductStore;
use crate::http_server::{openapi_json, HttpServer, HttpServerConfig};
use crate::observability::init_logging;

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(args).await,
        Command::Openapi { output } => openapi(output.as_deref()),
    }
}

/// Load config, open the record store and serve until shutdown.
pub async fn serve(args: ServeArgs) -> CliResult<()> {
    let config = HttpServerConfig::load(args.config.as_deref(), args.overrides())?;
    init_logging(&config.log_filter, config.log_format)?;

    info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "opening record store"
    );
    let store = SqlProductStore::connect(&config.database_url, config.max_connections).await?;
    store.ensure_schema().await?;

    HttpServer::new(config, Arc::new(store))
        .start()
        .await
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Write the generated OpenAPI document to `output`, or stdout.
pub fn openapi(output: Option<&Path>) -> CliResult<()> {
    let json = openapi_json()?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}
