//! CLI argument parsing for rutier
//!
//! Global flags: --map, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

pub use rutier_core::format::OutputFormat;

/// Rutier - shortest-route search over static road networks
#[derive(Parser, Debug)]
#[command(name = "rutier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML map file (defaults to the built-in Romania road network)
    #[arg(long, global = true)]
    pub map: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the minimum-distance route between two cities
    Route {
        /// Start city
        from: String,

        /// Goal city
        to: String,
    },

    /// List the cities on the map
    Cities,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}
