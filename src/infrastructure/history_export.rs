use crate::domain::history::SpinRecord;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Flat CSV row for one played spin.
#[derive(Debug, Serialize)]
struct HistoryRow {
    strategy: String,
    spin: usize,
    number: u8,
    result: String,
    wager: Decimal,
    bankroll_after: Decimal,
    first_column: String,
    second_column: String,
    weighting: String,
}

impl HistoryRow {
    fn new(strategy: &str, record: &SpinRecord) -> Self {
        Self {
            strategy: strategy.to_string(),
            spin: record.spin,
            number: record.number,
            result: record.result.to_string(),
            wager: record.wager,
            bankroll_after: record.bankroll_after,
            first_column: record.columns[0].to_string(),
            second_column: record.columns[1].to_string(),
            weighting: format!("{:?}", record.weighting).to_lowercase(),
        }
    }
}

/// Writes bankroll trajectories as CSV, one row per spin.
pub struct HistoryExporter;

impl HistoryExporter {
    pub fn write<W: Write>(writer: W, runs: &[(String, &[SpinRecord])]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(writer);

        for (strategy, history) in runs {
            for record in history.iter() {
                wtr.serialize(HistoryRow::new(strategy, record))
                    .context("Failed to serialize history row")?;
            }
        }
        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }

    pub fn export(path: &Path, runs: &[(String, &[SpinRecord])]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create history file {}", path.display()))?;
        Self::write(file, runs)?;

        info!("History exported to {:?}", path);
        Ok(())
    }
}
