use crate::domain::roulette::Column;
use crate::domain::staking::BetResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which weight set scored the columns for a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    Fixed,
    Dynamic,
}

/// One played spin. Appended once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// 1-based position among played spins
    pub spin: usize,
    pub number: u8,
    pub result: BetResult,
    pub wager: Decimal,
    pub bankroll_after: Decimal,
    pub columns: [Column; 2],
    pub weighting: Weighting,
}

/// Lifecycle of a run. Everything except `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    HaltedInsufficientFunds,
    HaltedStopGain,
    HaltedStopLoss,
    HaltedMaxConsecutiveLosses,
    Completed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Running => "running",
            RunState::HaltedInsufficientFunds => "insufficient funds",
            RunState::HaltedStopGain => "stop-gain",
            RunState::HaltedStopLoss => "stop-loss",
            RunState::HaltedMaxConsecutiveLosses => "max consecutive losses",
            RunState::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}
