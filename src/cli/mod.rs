//! CLI module for campground
//!
//! Provides command-line interface for:
//! - init: Write a starter config and seed file
//! - start: Boot the store and enter the serving loop
//! - routes: One-shot dump of the registered route table

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_store, init, register_resources, routes, start, Config};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
        Command::Routes { config } => routes(&config),
    }
}
