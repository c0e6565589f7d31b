//! CLI argument definitions using clap
//!
//! Commands:
//! - cinegraph serve [--port <port>]

use clap::{Parser, Subcommand};

/// cinegraph - HTTP CRUD facade over a movie/genre graph store
#[derive(Parser, Debug)]
#[command(name = "cinegraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP facade
    Serve {
        /// Listen port, overrides the HTTP_PORT environment variable
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
