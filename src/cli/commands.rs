//! CLI command implementations
//!
//! Boot sequence for `serve`: load environment configuration, build the
//! store handle, verify connectivity (fail fast), then bind and serve.

use std::sync::Arc;

use crate::config::Config;
use crate::graph::{GraphStore, MemoryGraphStore};
use crate::observability::Logger;
use crate::rest_api::HttpServer;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch an already-parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { port } => serve(port),
    }
}

/// Boot the HTTP facade
pub fn serve(port_override: Option<u16>) -> CliResult<()> {
    let mut config = Config::from_env().map_err(|e| CliError::config_error(e.to_string()))?;
    if let Some(port) = port_override {
        config.http_port = port;
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(async {
        // The in-process store implements the same contract a Bolt-backed
        // driver would; the bolt settings are carried for one.
        let store: Arc<dyn GraphStore> = Arc::new(MemoryGraphStore::new());

        store.verify_connectivity().await.map_err(|e| {
            Logger::fatal("STORE_UNREACHABLE", &[("error", &e.to_string())]);
            CliError::boot_failed(e.to_string())
        })?;
        Logger::info("STORE_CONNECTED", &[("uri", &config.bolt_uri)]);

        let server = HttpServer::with_config(config, store);
        server.start().await.map_err(CliError::from)
    })
}
