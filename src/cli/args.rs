//! CLI argument definitions using clap
//!
//! Commands:
//! - campground init --config <path>
//! - campground start --config <path>
//! - campground routes --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// campground - a self-hostable, versioned JSON list API
#[derive(Parser, Debug)]
#[command(name = "campground")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration file and seed file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./campground.json")]
        config: PathBuf,
    },

    /// Start the campground API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./campground.json")]
        config: PathBuf,
    },

    /// Print the registered route table and exit
    Routes {
        /// Path to configuration file
        #[arg(long, default_value = "./campground.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
