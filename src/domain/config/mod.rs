//! Configuration domain module
//!
//! Validated value objects describing a single backtest run.

pub mod simulation_config;

pub use simulation_config::{
    DEFAULT_MAX_CONSECUTIVE_LOSSES, DEFAULT_WINDOW_SIZE, SimulationConfig, SimulationConfigError,
};
