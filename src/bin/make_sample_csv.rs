use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use sentiment_scope::Session;
use sentiment_scope::config::DEFAULT_CSV_PATH;

/// Number of days of synthetic data to generate
const SAMPLE_DAYS: u32 = 7;

/// Deterministic sample dataset in the standard column layout, so the app
/// has something to chart out of the box.
fn main() -> Result<()> {
    build_sample_csv(PathBuf::from(DEFAULT_CSV_PATH))
}

fn build_sample_csv(output_path: PathBuf) -> Result<()> {
    let sessions = [
        (Session::UsClose, 1, 30),
        (Session::AsiaOpen, 5, 30),
        (Session::AsiaClose, 9, 30),
        (Session::UkOpen, 13, 30),
        (Session::UkClose, 17, 30),
        (Session::UsOpen, 21, 30),
    ];

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {:?}", output_path))?;
    writer.write_record([
        "Date",
        "Time",
        "Positive Funding Rate",
        "Negative Funding Rate",
        "Session",
    ])?;

    let first_day = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid sample start date");
    let mut rows = 0usize;
    for day_offset in 0..SAMPLE_DAYS {
        let date = first_day + chrono::Days::new(day_offset as u64);
        for (slot, (session, hour, minute)) in sessions.iter().enumerate() {
            let (bullish, bearish) = sample_rates(day_offset, slot);
            writer.write_record([
                date.format("%Y-%m-%d").to_string(),
                format!("{:02}:{:02}:00", hour, minute),
                format!("{:.6}", bullish),
                format!("{:.6}", bearish),
                session.label().to_string(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("✅ Sample dataset written to {:?} ({} rows).", output_path, rows);
    Ok(())
}

/// Smooth, repeatable pseudo-variation: a couple of sine waves, no RNG, so
/// regenerating the file is always diff-clean.
fn sample_rates(day_offset: u32, slot: usize) -> (f64, f64) {
    let phase = day_offset as f64 + slot as f64 / 6.0;
    let bullish = 0.010 + 0.006 * (phase * 1.3).sin().abs();
    let bearish = -(0.008 + 0.005 * (phase * 0.9).cos().abs());
    (bullish, bearish)
}
