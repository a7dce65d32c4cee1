// Column statistics, weights and selection
pub mod analysis;

// Simulation value objects
pub mod config;

// Domain-specific error types
pub mod errors;

// Per-spin records and run lifecycle
pub mod history;

// Performance tracking domain
pub mod performance;

// Wheel, outcomes and columns
pub mod roulette;

// Wager progressions
pub mod staking;
