//! Wager progressions.
//!
//! Each variant owns its progression state and answers two questions: how
//! much to stake next, and how the last result moves the progression.

mod dalembert;
mod fibonacci;
mod flat;
mod labouchere;
mod martingale;
mod paroli;

pub use dalembert::DAlembertStaking;
pub use fibonacci::FibonacciStaking;
pub use flat::FlatStaking;
pub use labouchere::LabouchereStaking;
pub use martingale::MartingaleStaking;
pub use paroli::ParoliStaking;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetResult {
    Win,
    Loss,
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetResult::Win => write!(f, "win"),
            BetResult::Loss => write!(f, "loss"),
        }
    }
}

/// Capability shared by every progression.
pub trait StakingPlan {
    fn name(&self) -> &str;

    /// Stake for the next spin. Never above `bankroll`.
    fn next_wager(&mut self, bankroll: Decimal) -> Decimal;

    fn on_win(&mut self, wager: Decimal);

    fn on_loss(&mut self, wager: Decimal);

    fn apply_result(&mut self, result: BetResult, wager: Decimal) {
        match result {
            BetResult::Win => self.on_win(wager),
            BetResult::Loss => self.on_loss(wager),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StakingMode {
    Flat,
    #[default]
    Martingale,
    Fibonacci,
    DAlembert,
    Paroli,
    Labouchere,
}

impl StakingMode {
    pub const ALL: [StakingMode; 6] = [
        StakingMode::Martingale,
        StakingMode::Fibonacci,
        StakingMode::DAlembert,
        StakingMode::Paroli,
        StakingMode::Labouchere,
        StakingMode::Flat,
    ];
}

impl std::str::FromStr for StakingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "none" => Ok(StakingMode::Flat),
            "martingale" => Ok(StakingMode::Martingale),
            "fibonacci" => Ok(StakingMode::Fibonacci),
            "dalembert" | "d'alembert" => Ok(StakingMode::DAlembert),
            "paroli" => Ok(StakingMode::Paroli),
            "labouchere" => Ok(StakingMode::Labouchere),
            _ => anyhow::bail!(
                "Invalid STAKING_STRATEGY: {}. Valid: flat, martingale, fibonacci, dalembert, paroli, labouchere",
                s
            ),
        }
    }
}

impl fmt::Display for StakingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakingMode::Flat => write!(f, "Flat"),
            StakingMode::Martingale => write!(f, "Martingale"),
            StakingMode::Fibonacci => write!(f, "Fibonacci"),
            StakingMode::DAlembert => write!(f, "DAlembert"),
            StakingMode::Paroli => write!(f, "Paroli"),
            StakingMode::Labouchere => write!(f, "Labouchere"),
        }
    }
}

/// A progression with its private state, one variant per [`StakingMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Staking {
    Flat(FlatStaking),
    Martingale(MartingaleStaking),
    Fibonacci(FibonacciStaking),
    DAlembert(DAlembertStaking),
    Paroli(ParoliStaking),
    Labouchere(LabouchereStaking),
}

impl Staking {
    /// Fresh progression at its starting state.
    pub fn new(mode: StakingMode, base_wager: Decimal) -> Self {
        match mode {
            StakingMode::Flat => Staking::Flat(FlatStaking::new(base_wager)),
            StakingMode::Martingale => Staking::Martingale(MartingaleStaking::new(base_wager)),
            StakingMode::Fibonacci => Staking::Fibonacci(FibonacciStaking::new(base_wager)),
            StakingMode::DAlembert => Staking::DAlembert(DAlembertStaking::new(base_wager)),
            StakingMode::Paroli => Staking::Paroli(ParoliStaking::new(base_wager)),
            StakingMode::Labouchere => Staking::Labouchere(LabouchereStaking::new(base_wager)),
        }
    }

    pub fn mode(&self) -> StakingMode {
        match self {
            Staking::Flat(_) => StakingMode::Flat,
            Staking::Martingale(_) => StakingMode::Martingale,
            Staking::Fibonacci(_) => StakingMode::Fibonacci,
            Staking::DAlembert(_) => StakingMode::DAlembert,
            Staking::Paroli(_) => StakingMode::Paroli,
            Staking::Labouchere(_) => StakingMode::Labouchere,
        }
    }

    fn plan(&mut self) -> &mut dyn StakingPlan {
        match self {
            Staking::Flat(s) => s,
            Staking::Martingale(s) => s,
            Staking::Fibonacci(s) => s,
            Staking::DAlembert(s) => s,
            Staking::Paroli(s) => s,
            Staking::Labouchere(s) => s,
        }
    }
}

impl StakingPlan for Staking {
    fn name(&self) -> &str {
        match self {
            Staking::Flat(s) => s.name(),
            Staking::Martingale(s) => s.name(),
            Staking::Fibonacci(s) => s.name(),
            Staking::DAlembert(s) => s.name(),
            Staking::Paroli(s) => s.name(),
            Staking::Labouchere(s) => s.name(),
        }
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        self.plan().next_wager(bankroll)
    }

    fn on_win(&mut self, wager: Decimal) {
        self.plan().on_win(wager)
    }

    fn on_loss(&mut self, wager: Decimal) {
        self.plan().on_loss(wager)
    }
}

/// Cap `wager` at `bankroll`, never below zero.
pub(crate) fn capped(wager: Decimal, bankroll: Decimal) -> Decimal {
    wager.min(bankroll).max(Decimal::ZERO)
}
