//! Configuration module for Rustroulette.
//!
//! Loads run parameters from environment variables (optionally via a `.env`
//! file loaded by the binary). Every value has a default; the command line
//! may override any of them afterwards.

use crate::domain::analysis::DEFAULT_OLD_STREAK_CUTOFF;
use crate::domain::config::{DEFAULT_MAX_CONSECUTIVE_LOSSES, DEFAULT_WINDOW_SIZE, SimulationConfig};
use crate::domain::staking::StakingMode;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTCOMES_FILE: &str = "resultados_roleta.json";
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Which progressions a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySelection {
    Single(StakingMode),
    All,
}

impl StrategySelection {
    pub fn modes(&self) -> Vec<StakingMode> {
        match self {
            StrategySelection::Single(mode) => vec![*mode],
            StrategySelection::All => StakingMode::ALL.to_vec(),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StrategySelection::All);
        }
        Ok(StrategySelection::Single(s.parse()?))
    }
}

impl fmt::Display for StrategySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySelection::Single(mode) => write!(f, "{}", mode),
            StrategySelection::All => write!(f, "all"),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub strategies: StrategySelection,
    pub outcomes_file: PathBuf,
    pub report_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let strategies: StrategySelection = env::var("STAKING_STRATEGY")
            .unwrap_or_else(|_| StakingMode::default().to_string())
            .parse()?;

        let defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            window_size: Self::parse_usize("WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?,
            initial_bankroll: Self::parse_decimal("INITIAL_BANKROLL", dec!(10))?,
            base_wager: Self::parse_decimal("BASE_WAGER", dec!(1))?,
            strategy: match strategies {
                StrategySelection::Single(mode) => mode,
                StrategySelection::All => defaults.strategy,
            },
            stop_gain: Self::parse_decimal("STOP_GAIN", dec!(20))?,
            stop_loss: Self::parse_decimal("STOP_LOSS", dec!(-5))?,
            max_consecutive_losses: Self::parse_usize(
                "MAX_CONSECUTIVE_LOSSES",
                DEFAULT_MAX_CONSECUTIVE_LOSSES,
            )?,
            old_streak_cutoff: Self::parse_usize("OLD_STREAK_CUTOFF", DEFAULT_OLD_STREAK_CUTOFF)?,
        };

        Ok(Self {
            simulation,
            strategies,
            outcomes_file: env::var("OUTCOMES_FILE")
                .unwrap_or_else(|_| DEFAULT_OUTCOMES_FILE.to_string())
                .into(),
            report_dir: env::var("REPORT_DIR")
                .unwrap_or_else(|_| DEFAULT_REPORT_DIR.to_string())
                .into(),
        })
    }

    fn parse_usize(key: &str, default: usize) -> Result<usize> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<usize>()
            .context(format!("Failed to parse {}", key))
    }

    fn parse_decimal(key: &str, default: Decimal) -> Result<Decimal> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .trim()
            .parse::<Decimal>()
            .context(format!("Failed to parse {}", key))
    }
}
