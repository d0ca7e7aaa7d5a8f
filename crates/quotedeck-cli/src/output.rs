//! Table and JSON rendering for the filtered frame.

use quotedeck_core::DashboardFrame;

use crate::error::CliError;

pub fn render_json(frame: &DashboardFrame, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(frame)?
    } else {
        serde_json::to_string(frame)?
    };
    println!("{payload}");
    Ok(())
}

pub fn render_table(frame: &DashboardFrame) {
    if frame.dropped_rows > 0 {
        eprintln!(
            "⚠ dropped {} malformed row(s) during normalization",
            frame.dropped_rows
        );
    }

    println!("range       : {}", frame.range);

    if frame.records.is_empty() {
        println!("no data in selected range");
        return;
    }

    println!(
        "{:<20} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "timestamp", "open", "high", "low", "close", "volume"
    );
    for record in &frame.records {
        println!(
            "{:<20} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12.0}",
            record.timestamp,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume
        );
    }
    println!("{} record(s)", frame.records.len());
}
