//! Subcommand implementations.

pub mod add;
pub mod delete;
pub mod list;
pub mod stats;

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use feedlog_client::FeedingLog;
use feedlog_file::FileGateway;

use crate::cli::Commands;

pub type Log = FeedingLog<FileGateway>;

pub async fn handle(command: Commands, data_file: &Path) -> Result<()> {
    let log = FeedingLog::new(FileGateway::new(data_file));

    match command {
        Commands::Add(args) => add::run(args, log).await,
        Commands::List(args) => list::run(args, log).await,
        Commands::Stats(args) => stats::run(args, log).await,
        Commands::Delete(args) => delete::run(args, log).await,
    }
}

/// Load the snapshot, degrading to the unavailable view on failure.
pub async fn load(log: &mut Log) {
    if let Err(e) = log.refresh().await {
        debug!(error = %e, "Showing records as unavailable");
    }
}
