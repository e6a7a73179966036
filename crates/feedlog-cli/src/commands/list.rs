//! List command implementation.

use anyhow::{Result, bail};
use clap::Args;

use feedlog_client::{LoadStatus, SnapshotView};
use feedlog_client::view::sorted_descending;

use super::{Log, load};
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print records as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, mut log: Log) -> Result<()> {
    load(&mut log).await;

    if args.json {
        if let LoadStatus::Failed(reason) = log.store().status() {
            bail!("Records unavailable: {}", reason);
        }
        for record in sorted_descending(log.store().records()) {
            output::json(record)?;
        }
        return Ok(());
    }

    match log.snapshot_view() {
        SnapshotView::NotLoaded => output::notice("Records not loaded."),
        SnapshotView::Unavailable { reason } => {
            output::error(&format!("Records unavailable: {}", reason));
        }
        SnapshotView::Empty => output::notice("No records yet. Add the first one!"),
        SnapshotView::Records(rows) => {
            println!("{}", output::stats_line(&log.daily_stats()));
            println!();
            for row in &rows {
                output::row(row);
            }
        }
    }

    Ok(())
}
