//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use feedlog_core::{FeedingTime, FeedingType, NewFeedingRecord};

use super::Log;
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Feeding type (e.g., breast, bottle, solid)
    #[arg(long = "type", short = 't')]
    pub feeding_type: FeedingType,

    /// Amount in milliliters (0 when not applicable)
    #[arg(long, short = 'a', default_value_t = 0)]
    pub amount: u32,

    /// Duration in minutes (0 when not applicable)
    #[arg(long, short = 'd', default_value_t = 0)]
    pub duration: u32,

    /// Feeding time as YYYY-MM-DDTHH:MM (defaults to now)
    #[arg(long)]
    pub time: Option<FeedingTime>,

    /// Free-form notes
    #[arg(long, short = 'n', default_value = "")]
    pub notes: String,
}

pub async fn run(args: AddArgs, mut log: Log) -> Result<()> {
    let candidate = NewFeedingRecord::new(
        args.feeding_type,
        args.time.unwrap_or_else(FeedingTime::now),
    )
    .with_amount(args.amount)
    .with_duration(args.duration)
    .with_notes(args.notes);

    let record = log.add(&candidate).await.context("Failed to add record")?;

    println!("{}", record.id);
    output::success(&format!(
        "Added {} feeding at {}",
        record.feeding_type, record.feeding_time
    ));
    output::notice(&output::stats_line(&log.daily_stats()));

    Ok(())
}
