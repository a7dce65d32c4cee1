pub mod parallel_runner;
pub mod reporting;
pub mod simulator;

pub use parallel_runner::{ParallelRunner, StrategyRun};
pub use reporting::{BacktestReport, BacktestReporter, ReportEntry, ReportSummary};
pub use simulator::{SimulationResult, Simulator};
