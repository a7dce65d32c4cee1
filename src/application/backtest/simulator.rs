use crate::domain::analysis::{AnalysisWindow, ColumnSelection, StatisticsSnapshot, WeightSet};
use crate::domain::config::{SimulationConfig, SimulationConfigError};
use crate::domain::errors::SimulationError;
use crate::domain::history::{RunState, SpinRecord, Weighting};
use crate::domain::performance::metrics::PerformanceMetrics;
use crate::domain::roulette::Outcome;
use crate::domain::staking::{BetResult, Staking, StakingMode, StakingPlan};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Amount credited back on a winning two-column bet, per unit staked.
const WIN_RETURN: Decimal = dec!(1.5);

/// Consecutive losses above this switch scoring to dynamic weights.
const DYNAMIC_WEIGHTING_LOSSES: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub strategy: StakingMode,
    pub initial_bankroll: Decimal,
    pub final_bankroll: Decimal,
    pub net_gain: Decimal,
    pub state: RunState,
    pub history: Vec<SpinRecord>,
}

impl SimulationResult {
    pub fn metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics::calculate(&self.history, self.initial_bankroll)
    }
}

/// Replays an outcome sequence spin by spin for one staking progression.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// # Errors
    ///
    /// Returns `SimulationConfigError` if the config violates its invariants
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationConfigError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the window with the first `window_size` outcomes and bet on the
    /// rest. With fewer outcomes than that, nothing is played.
    pub fn run(&self, outcomes: &[Outcome]) -> Result<SimulationResult, SimulationError> {
        let seed_len = self.config.window_size.min(outcomes.len());
        let (seed, spins) = outcomes.split_at(seed_len);
        self.run_with_window(AnalysisWindow::new(seed), spins)
    }

    /// Run with an explicit starting window. The window is owned by this run.
    pub fn run_with_window(
        &self,
        mut window: AnalysisWindow,
        spins: &[Outcome],
    ) -> Result<SimulationResult, SimulationError> {
        let config = &self.config;
        let mut staking = Staking::new(config.strategy, config.base_wager);
        let mut bankroll = config.initial_bankroll;
        let mut history: Vec<SpinRecord> = Vec::new();
        let mut consecutive_losses = 0usize;
        let mut state = RunState::Running;

        for outcome in spins {
            let (selection, weighting) = self.decide(&window, consecutive_losses)?;

            let wager = staking.next_wager(bankroll);
            if wager.is_zero() || wager > bankroll {
                info!(
                    "Simulator [{}]: bankroll {} cannot cover a wager. Halting.",
                    config.strategy, bankroll
                );
                state = RunState::HaltedInsufficientFunds;
                break;
            }
            bankroll -= wager;

            let result = if selection.covers(outcome.column()) {
                bankroll = wager
                    .checked_mul(WIN_RETURN)
                    .and_then(|payout| bankroll.checked_add(payout))
                    .ok_or(SimulationError::BankrollOverflow {
                        spin: history.len() + 1,
                    })?;
                consecutive_losses = 0;
                BetResult::Win
            } else {
                consecutive_losses += 1;
                BetResult::Loss
            };
            staking.apply_result(result, wager);

            history.push(SpinRecord {
                spin: history.len() + 1,
                number: outcome.number(),
                result,
                wager,
                bankroll_after: bankroll,
                columns: selection.columns,
                weighting,
            });
            debug!(
                "Simulator [{}]: spin {} -> {} on {}/{} ({:?}), wager {}, bankroll {}",
                config.strategy,
                history.len(),
                outcome.number(),
                selection.columns[0],
                selection.columns[1],
                weighting,
                wager,
                bankroll
            );

            let net = bankroll - config.initial_bankroll;
            state = match result {
                BetResult::Win if net >= config.stop_gain => RunState::HaltedStopGain,
                BetResult::Loss if net <= config.stop_loss => RunState::HaltedStopLoss,
                BetResult::Loss if consecutive_losses >= config.max_consecutive_losses => {
                    RunState::HaltedMaxConsecutiveLosses
                }
                _ => RunState::Running,
            };
            if state.is_terminal() {
                info!(
                    "Simulator [{}]: {} reached after {} spins (net {}).",
                    config.strategy,
                    state,
                    history.len(),
                    net
                );
                break;
            }

            window.slide(*outcome);
        }

        if state == RunState::Running {
            state = RunState::Completed;
        }

        Ok(SimulationResult {
            strategy: config.strategy,
            initial_bankroll: config.initial_bankroll,
            final_bankroll: bankroll,
            net_gain: bankroll - config.initial_bankroll,
            state,
            history,
        })
    }

    /// Pick the columns for the next spin from the current window.
    ///
    /// Dynamic weights kick in after a house number or more than one loss
    /// in a row; otherwise [`WeightSet::FIXED`] is used.
    pub fn decide(
        &self,
        window: &AnalysisWindow,
        consecutive_losses: usize,
    ) -> Result<(ColumnSelection, Weighting), SimulationError> {
        let snapshot = StatisticsSnapshot::compute(window.outcomes(), self.config.old_streak_cutoff);

        let after_house = window.outcomes().last().is_some_and(Outcome::is_house);
        let weighting = if after_house || consecutive_losses > DYNAMIC_WEIGHTING_LOSSES {
            Weighting::Dynamic
        } else {
            Weighting::Fixed
        };

        let weights = match weighting {
            Weighting::Fixed => WeightSet::FIXED,
            Weighting::Dynamic => WeightSet::from_snapshot(&snapshot)?,
        };

        Ok((snapshot.select(&weights), weighting))
    }
}
