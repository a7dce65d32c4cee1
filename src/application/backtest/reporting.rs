use crate::application::backtest::parallel_runner::StrategyRun;
use crate::application::backtest::simulator::SimulationResult;
use crate::domain::config::SimulationConfig;
use crate::domain::history::RunState;
use crate::domain::performance::metrics::PerformanceMetrics;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct BacktestReport {
    pub timestamp: DateTime<Utc>,
    pub configuration: SimulationConfig,
    pub outcomes_analyzed: usize,
    pub results: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub strategy: String,
    pub state: Option<RunState>,
    pub final_bankroll: Option<Decimal>,
    pub metrics: Option<PerformanceMetrics>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_runs: usize,
    pub profitable_runs: usize,
    pub failed_runs: usize,
    pub best_performer: String,
    pub worst_performer: String,
}

impl ReportEntry {
    pub fn from_run(run: &StrategyRun) -> Self {
        match &run.result {
            Ok(result) => Self::from_result(result),
            Err(e) => Self {
                strategy: run.strategy.to_string(),
                state: None,
                final_bankroll: None,
                metrics: None,
                error: Some(e.clone()),
            },
        }
    }

    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            strategy: result.strategy.to_string(),
            state: Some(result.state),
            final_bankroll: Some(result.final_bankroll),
            metrics: Some(result.metrics()),
            error: None,
        }
    }

    fn net_gain(&self) -> Option<Decimal> {
        self.metrics.as_ref().map(|m| m.net_gain)
    }
}

pub struct BacktestReporter {
    output_dir: PathBuf,
}

impl BacktestReporter {
    /// The directory is only created when a report is written.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write a timestamped JSON report and return its path.
    pub fn generate_report(
        &self,
        entries: &[ReportEntry],
        config: &SimulationConfig,
        outcomes_analyzed: usize,
    ) -> Result<PathBuf> {
        let timestamp = Utc::now();
        let report = BacktestReport {
            timestamp,
            configuration: config.clone(),
            outcomes_analyzed,
            results: entries.to_vec(),
            summary: Self::calculate_summary(entries),
        };

        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        let filename = format!("backtest_report_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create report directory {}", self.output_dir.display())
        })?;
        let path = self.output_dir.join(filename);

        fs::write(&path, json)
            .with_context(|| format!("Failed to write report file {}", path.display()))?;

        info!("BacktestReporter: report saved to {}", path.display());
        Ok(path)
    }

    pub fn print_summary(&self, entries: &[ReportEntry]) {
        if entries.is_empty() {
            println!("No results to report.");
            return;
        }

        println!("\n{}", "=".repeat(112));
        println!("BACKTEST SUMMARY");
        println!("{}", "=".repeat(112));
        println!(
            "{:<12} | {:<24} | {:>9} | {:>9} | {:>8} | {:>5} | {:>7} | {:>8} | {:>7}",
            "Strategy", "Outcome", "Final", "Net", "Return%", "Spins", "WinRate", "MaxWager", "DD%"
        );
        println!("{}", "-".repeat(112));

        for entry in entries {
            match (&entry.metrics, entry.state, entry.final_bankroll) {
                (Some(m), Some(state), Some(final_bankroll)) => println!(
                    "{:<12} | {:<24} | {:>9.2} | {:>9.2} | {:>7.2}% | {:>5} | {:>6.1}% | {:>8.2} | {:>6.2}%",
                    entry.strategy,
                    state.to_string(),
                    final_bankroll,
                    m.net_gain,
                    m.return_pct,
                    m.spins_played,
                    m.win_rate * 100.0,
                    m.largest_wager,
                    m.max_drawdown_pct
                ),
                _ => println!(
                    "{:<12} | error: {}",
                    entry.strategy,
                    entry.error.as_deref().unwrap_or("unknown")
                ),
            }
        }
        println!("{}", "=".repeat(112));
    }

    fn calculate_summary(entries: &[ReportEntry]) -> ReportSummary {
        let ranked: Vec<(&ReportEntry, Decimal)> = entries
            .iter()
            .filter_map(|e| e.net_gain().map(|net| (e, net)))
            .collect();

        let describe = |found: Option<&(&ReportEntry, Decimal)>| {
            found
                .map(|(e, net)| format!("{} ({:.2})", e.strategy, net))
                .unwrap_or_else(|| "N/A".to_string())
        };

        ReportSummary {
            total_runs: entries.len(),
            profitable_runs: ranked.iter().filter(|(_, net)| *net > Decimal::ZERO).count(),
            failed_runs: entries.len() - ranked.len(),
            best_performer: describe(ranked.iter().max_by_key(|(_, net)| *net)),
            worst_performer: describe(ranked.iter().min_by_key(|(_, net)| *net)),
        }
    }
}
