use crate::application::backtest::simulator::{SimulationResult, Simulator};
use crate::domain::config::{SimulationConfig, SimulationConfigError};
use crate::domain::roulette::Outcome;
use crate::domain::staking::StakingMode;
use rayon::prelude::*;
use tracing::info;

/// Result of a single run in a batch
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: StakingMode,
    pub result: Result<SimulationResult, String>,
}

/// Replays the same outcome sequence under several staking progressions.
///
/// Every run gets its own window, bankroll and progression, so runs share
/// nothing but the read-only outcome slice.
pub struct ParallelRunner {
    config: SimulationConfig,
}

impl ParallelRunner {
    /// # Arguments
    ///
    /// * `config` - Base parameters; only `strategy` differs between runs
    ///
    /// # Errors
    ///
    /// Returns `SimulationConfigError` if the base parameters are invalid
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationConfigError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// Run one simulation per strategy. Results keep the order of `strategies`.
    ///
    /// A failing run is reported as `Err` in its slot; the others still complete.
    pub fn run_parallel(&self, strategies: &[StakingMode], outcomes: &[Outcome]) -> Vec<StrategyRun> {
        info!(
            "ParallelRunner: {} strategies over {} outcomes",
            strategies.len(),
            outcomes.len()
        );

        strategies
            .par_iter()
            .map(|&strategy| {
                let result = Simulator::new(self.config.with_strategy(strategy))
                    .map_err(|e| e.to_string())
                    .and_then(|simulator| simulator.run(outcomes).map_err(|e| e.to_string()));
                StrategyRun { strategy, result }
            })
            .collect()
    }

    pub fn run_all(&self, outcomes: &[Outcome]) -> Vec<StrategyRun> {
        self.run_parallel(&StakingMode::ALL, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roulette::Color;
    use rust_decimal_macros::dec;

    fn sequence() -> Vec<Outcome> {
        [17, 4, 0, 25, 33, 8, 12, 29, 1, 36, 14, 0, 7, 22, 3, 19, 30, 11, 5, 26]
            .iter()
            .map(|&n| {
                let color = if n == 0 { Color::Green } else { Color::Black };
                Outcome::new(n, color).unwrap()
            })
            .collect()
    }

    fn config() -> SimulationConfig {
        SimulationConfig {
            window_size: 8,
            initial_bankroll: dec!(50),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_results_follow_requested_order() {
        let runner = ParallelRunner::new(config()).unwrap();
        let runs = runner.run_all(&sequence());

        let strategies: Vec<StakingMode> = runs.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, StakingMode::ALL.to_vec());
        assert!(runs.iter().all(|r| r.result.is_ok()));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let outcomes = sequence();
        let runner = ParallelRunner::new(config()).unwrap();

        for run in runner.run_all(&outcomes) {
            let sequential = Simulator::new(config().with_strategy(run.strategy))
                .unwrap()
                .run(&outcomes)
                .unwrap();
            assert_eq!(run.result.unwrap(), sequential);
        }
    }

    #[test]
    fn test_invalid_base_config_is_rejected() {
        let bad = SimulationConfig {
            max_consecutive_losses: 0,
            ..config()
        };

        assert!(matches!(
            ParallelRunner::new(bad),
            Err(SimulationConfigError::InvalidLimit { .. })
        ));
    }
}
