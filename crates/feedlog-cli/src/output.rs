//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use feedlog_client::{DailyStats, RecordRow};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a muted notice on stderr.
pub fn notice(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// One-line summary of a day's totals.
pub fn stats_line(stats: &DailyStats) -> String {
    format!("Today: {} feedings, {} ml", stats.count, stats.total_amount)
}

/// Print one record as a list entry.
pub fn row(row: &RecordRow) {
    let mut details = Vec::new();
    if let Some(amount) = row.amount_ml() {
        details.push(format!("{} ml", amount));
    }
    if let Some(duration) = row.duration_min() {
        details.push(format!("{} min", duration));
    }

    println!(
        "{}  {}  {}  {}",
        format!("#{}", row.record.id).as_str().dimmed(),
        row.label.to_string().as_str().bold(),
        row.record.feeding_type,
        details.join(", ")
    );

    if let Some(notes) = row.notes() {
        println!("      {} {}", "notes:".dimmed(), notes);
    }
}
