use rust_decimal_macros::dec;
use rustroulette::application::backtest::{BacktestReporter, ParallelRunner, ReportEntry, Simulator};
use rustroulette::domain::config::SimulationConfig;
use rustroulette::domain::errors::SimulationError;
use rustroulette::domain::staking::StakingMode;
use rustroulette::infrastructure::{HistoryExporter, OutcomeLoader};
use std::fs;
use std::io::Write;

fn write_outcomes(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("resultados_roleta.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

fn recorded_spins() -> String {
    let numbers = [
        32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1,
        20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26, 0, 32, 15, 19, 4, 21, 2, 25,
    ];
    let pairs: Vec<String> = numbers
        .iter()
        .map(|&n| {
            let color = if n == 0 { "green" } else if n % 2 == 0 { "black" } else { "red" };
            format!("[{}, \"{}\"]", n, color)
        })
        .collect();
    format!("[{}]", pairs.join(", "))
}

#[test]
fn test_loaded_file_drives_a_full_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_outcomes(&dir, &recorded_spins());

    let outcomes = OutcomeLoader::new(&path).load().unwrap();
    assert_eq!(outcomes.len(), 44);

    let config = SimulationConfig {
        window_size: 30,
        initial_bankroll: dec!(100),
        ..SimulationConfig::default()
    };
    let runs = ParallelRunner::new(config.clone()).unwrap().run_all(&outcomes);
    assert_eq!(runs.len(), StakingMode::ALL.len());

    let entries: Vec<ReportEntry> = runs.iter().map(ReportEntry::from_run).collect();
    assert!(entries.iter().all(|e| e.error.is_none()));

    let reporter = BacktestReporter::new(dir.path().join("reports"));
    let report_path = reporter.generate_report(&entries, &config, outcomes.len()).unwrap();
    assert!(report_path.exists());

    let csv_path = dir.path().join("history.csv");
    let histories: Vec<(String, &[_])> = runs
        .iter()
        .map(|run| {
            let result = run.result.as_ref().unwrap();
            (run.strategy.to_string(), result.history.as_slice())
        })
        .collect();
    HistoryExporter::export(&csv_path, &histories).unwrap();

    let played: usize = histories.iter().map(|(_, h)| h.len()).sum();
    let csv = fs::read_to_string(csv_path).unwrap();
    assert_eq!(csv.lines().count(), played + 1);
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = OutcomeLoader::new(dir.path().join("nope.json"))
        .load()
        .unwrap_err();

    assert!(matches!(err, SimulationError::InputUnavailable { .. }));
}

#[test]
fn test_bad_entry_rejects_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_outcomes(&dir, r#"[[5, "red"], [40, "black"], [7, "red"]]"#);

    let err = OutcomeLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, SimulationError::MalformedInput { .. }));
}

#[test]
fn test_loaded_and_in_memory_runs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_outcomes(&dir, &recorded_spins());
    let loaded = OutcomeLoader::new(&path).load().unwrap();

    let config = SimulationConfig {
        window_size: 30,
        strategy: StakingMode::Fibonacci,
        ..SimulationConfig::default()
    };
    let simulator = Simulator::new(config).unwrap();

    let direct = rustroulette::infrastructure::outcome_loader::parse_outcomes(&recorded_spins())
        .unwrap();
    assert_eq!(simulator.run(&loaded).unwrap(), simulator.run(&direct).unwrap());
}
