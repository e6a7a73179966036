//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{add, delete, list, stats};

/// Log feedings, review today's totals, and prune mistakes.
#[derive(Parser, Debug)]
#[command(name = "feedlog")]
#[command(author, version = env!("FEEDLOG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Record file (defaults to the platform data directory)
    #[arg(long, env = "FEEDLOG_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a feeding
    Add(add::AddArgs),

    /// Show all feedings, most recent first
    List(list::ListArgs),

    /// Show today's feeding count and total amount
    Stats(stats::StatsArgs),

    /// Delete a feeding after confirmation
    Delete(delete::DeleteArgs),
}
