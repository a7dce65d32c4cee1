use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use rustroulette::application::backtest::{BacktestReporter, ParallelRunner, ReportEntry};
use rustroulette::config::{Config, StrategySelection};
use rustroulette::domain::history::SpinRecord;
use rustroulette::infrastructure::{HistoryExporter, OutcomeLoader};
use std::path::PathBuf;
use tracing::{info, warn};

/// Backtest column-betting progressions against recorded roulette spins.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file of [number, "color"] pairs (defaults to OUTCOMES_FILE)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Staking progression, or "all" to compare every one
    #[arg(short, long)]
    strategy: Option<StrategySelection>,

    /// Outcomes used to seed the analysis window
    #[arg(short, long)]
    window: Option<usize>,

    /// Starting bankroll
    #[arg(short, long)]
    bankroll: Option<Decimal>,

    /// Base wager unit
    #[arg(long)]
    base_wager: Option<Decimal>,

    /// Halt once net gain reaches this amount
    #[arg(long)]
    stop_gain: Option<Decimal>,

    /// Halt once net gain falls to this amount (e.g. -5)
    #[arg(long, allow_hyphen_values = true)]
    stop_loss: Option<Decimal>,

    /// Halt after this many losses in a row
    #[arg(long)]
    max_losses: Option<usize>,

    /// Non-house outcomes skipped before the old-streak scan
    #[arg(long)]
    old_streak_cutoff: Option<usize>,

    /// Directory for the JSON report (defaults to REPORT_DIR)
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Skip writing the JSON report
    #[arg(long)]
    no_report: bool,

    /// Write every spin of every run to this CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        let sim = &mut config.simulation;
        if let Some(selection) = self.strategy {
            config.strategies = selection;
            if let StrategySelection::Single(mode) = selection {
                sim.strategy = mode;
            }
        }
        if let Some(window) = self.window {
            sim.window_size = window;
        }
        if let Some(bankroll) = self.bankroll {
            sim.initial_bankroll = bankroll;
        }
        if let Some(base) = self.base_wager {
            sim.base_wager = base;
        }
        if let Some(stop_gain) = self.stop_gain {
            sim.stop_gain = stop_gain;
        }
        if let Some(stop_loss) = self.stop_loss {
            sim.stop_loss = stop_loss;
        }
        if let Some(max_losses) = self.max_losses {
            sim.max_consecutive_losses = max_losses;
        }
        if let Some(cutoff) = self.old_streak_cutoff {
            sim.old_streak_cutoff = cutoff;
        }
        if let Some(input) = self.input {
            config.outcomes_file = input;
        }
        if let Some(dir) = self.report_dir {
            config.report_dir = dir;
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();
    let write_report = !cli.no_report;
    let export_csv = cli.export_csv.clone();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config);
    let runner =
        ParallelRunner::new(config.simulation.clone()).context("Invalid simulation parameters")?;

    info!(
        "Rustroulette: strategy {} | window {} | bankroll {} | base wager {}",
        config.strategies,
        config.simulation.window_size,
        config.simulation.initial_bankroll,
        config.simulation.base_wager
    );

    let outcomes = OutcomeLoader::new(&config.outcomes_file)
        .load()
        .with_context(|| format!("Failed to load outcomes from {}", config.outcomes_file.display()))?;
    if outcomes.len() <= config.simulation.window_size {
        warn!(
            "Only {} outcomes for a window of {}: no spins will be played",
            outcomes.len(),
            config.simulation.window_size
        );
    }

    let runs = runner.run_parallel(&config.strategies.modes(), &outcomes);

    let entries: Vec<ReportEntry> = runs.iter().map(ReportEntry::from_run).collect();
    let reporter = BacktestReporter::new(&config.report_dir);
    reporter.print_summary(&entries);

    if write_report {
        let path = reporter.generate_report(&entries, &config.simulation, outcomes.len())?;
        println!("Report saved to: {}", path.display());
    }

    if let Some(path) = export_csv {
        let histories: Vec<(String, &[SpinRecord])> = runs
            .iter()
            .filter_map(|run| {
                run.result
                    .as_ref()
                    .ok()
                    .map(|result| (run.strategy.to_string(), result.history.as_slice()))
            })
            .collect();
        HistoryExporter::export(&path, &histories)?;
        println!("History exported to: {}", path.display());
    }

    let failures: Vec<String> = runs
        .iter()
        .filter_map(|run| run.result.as_ref().err().map(|e| format!("{}: {}", run.strategy, e)))
        .collect();
    if !failures.is_empty() {
        anyhow::bail!("{} run(s) failed: {}", failures.len(), failures.join("; "));
    }

    Ok(())
}
