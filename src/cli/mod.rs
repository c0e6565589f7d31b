//! CLI module for cinegraph
//!
//! Provides the command-line interface:
//! - serve: read environment configuration, verify store connectivity,
//!   start the HTTP facade

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
