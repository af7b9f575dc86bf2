//! CLI argument parsing for roadtrip
//!
//! Global flags: --data, --config, --format, --quiet, --verbose

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Roadtrip - find the shortest route between two locations
#[derive(Parser, Debug)]
#[command(name = "roadtrip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Distance dataset to load (overrides the configured path)
    #[arg(long, global = true, env = "ROADTRIP_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "ROADTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or roadtrip_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for pairs of locations until the exit token is entered (default)
    Interactive,

    /// Print the shortest route between two locations
    Route {
        /// Starting location identifier
        from: String,

        /// Destination location identifier
        to: String,
    },

    /// Summarize the loaded dataset
    Stats,

    /// List every known location identifier
    Locations,
}
