//! Delete command implementation.
//!
//! The record is only removed after the request is confirmed, either
//! interactively or with `--force`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use feedlog_client::view::relative_label;
use feedlog_core::RecordId;

use super::Log;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the record to delete
    pub id: RecordId,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, mut log: Log) -> Result<()> {
    log.refresh().await.context("Failed to load records")?;

    let record = log
        .store()
        .get(args.id)
        .cloned()
        .with_context(|| format!("Record {} not found", args.id))?;

    log.request_delete(record.id)?;

    if !args.force {
        let label = relative_label(record.feeding_time, Local::now().naive_local());
        eprint!(
            "Delete {} feeding #{} ({})? [y/N] ",
            record.feeding_type, record.id, label
        );
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            log.cancel();
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    log.confirm().await.context("Failed to delete record")?;
    output::success(&format!("Deleted record {}", record.id));

    Ok(())
}
