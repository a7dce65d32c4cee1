//! Simulation Configuration Domain Value Object
//!
//! `SimulationConfig` carries every knob of a single backtest run: window
//! size, bankroll, staking progression and the three halt thresholds.
//!
//! # Invariants
//!
//! - `initial_bankroll` and `base_wager` are strictly positive
//! - `stop_gain` >= 0 and `stop_loss` <= 0 (both relative to the start)
//! - `max_consecutive_losses` > 0

use crate::domain::analysis::DEFAULT_OLD_STREAK_CUTOFF;
use crate::domain::staking::StakingMode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WINDOW_SIZE: usize = 30;
pub const DEFAULT_MAX_CONSECUTIVE_LOSSES: usize = 3;

/// Error type for SimulationConfig validation
#[derive(Debug, Error, PartialEq)]
pub enum SimulationConfigError {
    #[error("Invalid amount: {field} = {value}. Must be positive")]
    NonPositiveAmount { field: String, value: Decimal },

    #[error("Invalid threshold: {field} = {value}. {expected}")]
    InvalidThreshold {
        field: String,
        value: Decimal,
        expected: String,
    },

    #[error("Invalid limit: {field} = {value}. Must be positive")]
    InvalidLimit { field: String, value: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Outcomes reserved to seed the analysis window before betting starts
    pub window_size: usize,

    pub initial_bankroll: Decimal,

    /// Unit stake every progression is expressed in
    pub base_wager: Decimal,

    pub strategy: StakingMode,

    /// Halt once net gain reaches this amount
    pub stop_gain: Decimal,

    /// Halt once net gain falls to this amount (negative)
    pub stop_loss: Decimal,

    pub max_consecutive_losses: usize,

    /// Non-house outcomes skipped before the old-streak scan
    pub old_streak_cutoff: usize,
}

impl SimulationConfig {
    /// Validate and return the config.
    ///
    /// # Errors
    ///
    /// Returns `SimulationConfigError` if any field violates the invariants
    pub fn validated(self) -> Result<Self, SimulationConfigError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SimulationConfigError> {
        Self::validate_positive("initial_bankroll", self.initial_bankroll)?;
        Self::validate_positive("base_wager", self.base_wager)?;

        if self.stop_gain < Decimal::ZERO {
            return Err(SimulationConfigError::InvalidThreshold {
                field: "stop_gain".to_string(),
                value: self.stop_gain,
                expected: "Must be zero or positive".to_string(),
            });
        }
        if self.stop_loss > Decimal::ZERO {
            return Err(SimulationConfigError::InvalidThreshold {
                field: "stop_loss".to_string(),
                value: self.stop_loss,
                expected: "Must be zero or negative".to_string(),
            });
        }

        if self.max_consecutive_losses == 0 {
            return Err(SimulationConfigError::InvalidLimit {
                field: "max_consecutive_losses".to_string(),
                value: self.max_consecutive_losses,
            });
        }

        Ok(())
    }

    fn validate_positive(field: &str, value: Decimal) -> Result<(), SimulationConfigError> {
        if value <= Decimal::ZERO {
            return Err(SimulationConfigError::NonPositiveAmount {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Same run parameters with another staking progression.
    pub fn with_strategy(&self, strategy: StakingMode) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            initial_bankroll: dec!(10),
            base_wager: dec!(1),
            strategy: StakingMode::Martingale,
            stop_gain: dec!(20),
            stop_loss: dec!(-5),
            max_consecutive_losses: DEFAULT_MAX_CONSECUTIVE_LOSSES,
            old_streak_cutoff: DEFAULT_OLD_STREAK_CUTOFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.window_size, 30);
        assert_eq!(config.max_consecutive_losses, 3);
        assert_eq!(config.old_streak_cutoff, 5);
        assert_eq!(config.strategy, StakingMode::Martingale);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_base_wager_rejected() {
        let config = SimulationConfig {
            base_wager: Decimal::ZERO,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validated().unwrap_err(),
            SimulationConfigError::NonPositiveAmount {
                field: "base_wager".to_string(),
                value: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_positive_stop_loss_rejected() {
        let config = SimulationConfig {
            stop_loss: dec!(3),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationConfigError::InvalidThreshold { ref field, .. }) if field == "stop_loss"
        ));
    }

    #[test]
    fn test_zero_loss_limit_rejected() {
        let config = SimulationConfig {
            max_consecutive_losses: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_strategy_keeps_other_fields() {
        let config = SimulationConfig {
            initial_bankroll: dec!(250),
            ..SimulationConfig::default()
        };
        let paroli = config.with_strategy(StakingMode::Paroli);

        assert_eq!(paroli.strategy, StakingMode::Paroli);
        assert_eq!(paroli.initial_bankroll, dec!(250));
    }
}
