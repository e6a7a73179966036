//! Stats command implementation.

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use feedlog_client::LoadStatus;

use super::{Log, load};
use crate::output;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print stats as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    date: NaiveDate,
    count: usize,
    total_amount: u64,
}

pub async fn run(args: StatsArgs, mut log: Log) -> Result<()> {
    load(&mut log).await;

    if let LoadStatus::Failed(reason) = log.store().status() {
        if args.json {
            bail!("Records unavailable: {}", reason);
        }
        output::error(&format!("Records unavailable: {}", reason));
    }

    let today = Local::now().date_naive();
    let stats = log.daily_stats_at(today);

    if args.json {
        return output::json(&StatsOutput {
            date: today,
            count: stats.count,
            total_amount: stats.total_amount,
        });
    }

    output::field("Date", &today.to_string());
    output::field("Feedings", &stats.count.to_string());
    output::field("Total", &format!("{} ml", stats.total_amount));

    Ok(())
}
