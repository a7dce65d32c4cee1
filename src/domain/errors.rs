use thiserror::Error;

/// Errors raised while replaying an outcome sequence.
///
/// Halts (stop-gain, stop-loss, insufficient bankroll...) are run states,
/// not errors. Everything here means the input or the arithmetic is broken
/// and the run must not continue.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Degenerate weights: all components are zero before normalization")]
    DegenerateWeights,

    #[error("Input unavailable: {reason}")]
    InputUnavailable { reason: String },

    #[error("Bankroll overflow at spin {spin}: amounts exceed the decimal range")]
    BankrollOverflow { spin: usize },
}

impl SimulationError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SimulationError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        SimulationError::InputUnavailable {
            reason: reason.into(),
        }
    }
}
