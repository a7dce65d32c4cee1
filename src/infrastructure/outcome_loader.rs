//! Loads recorded spin outcomes from a JSON file.
//!
//! The file holds one array of `[number, "color"]` pairs in chronological
//! order, e.g. `[[17, "black"], [0, "green"], [32, "red"]]`.

use crate::domain::errors::SimulationError;
use crate::domain::roulette::{Color, Outcome};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct OutcomeLoader {
    file_path: PathBuf,
}

impl OutcomeLoader {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read and decode the whole file.
    ///
    /// # Errors
    ///
    /// `InputUnavailable` when the file cannot be read or is not JSON,
    /// `MalformedInput` when any entry is not a valid pair.
    pub fn load(&self) -> Result<Vec<Outcome>, SimulationError> {
        let content = fs::read_to_string(&self.file_path).map_err(|e| {
            SimulationError::unavailable(format!("{}: {}", self.file_path.display(), e))
        })?;
        let outcomes = parse_outcomes(&content)?;

        info!(
            "Loaded {} outcomes from {:?}",
            outcomes.len(),
            self.file_path
        );
        Ok(outcomes)
    }
}

pub fn parse_outcomes(json: &str) -> Result<Vec<Outcome>, SimulationError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| SimulationError::unavailable(format!("invalid JSON: {}", e)))?;
    decode_outcomes(&value)
}

/// Decode an already-parsed JSON document. The first bad entry rejects the
/// whole sequence.
pub fn decode_outcomes(value: &Value) -> Result<Vec<Outcome>, SimulationError> {
    let entries = value
        .as_array()
        .ok_or_else(|| SimulationError::malformed("expected a top-level array of pairs"))?;

    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            decode_pair(entry).map_err(|e| match e {
                SimulationError::MalformedInput { reason } => {
                    SimulationError::malformed(format!("entry {}: {}", position, reason))
                }
                other => other,
            })
        })
        .collect()
}

fn decode_pair(entry: &Value) -> Result<Outcome, SimulationError> {
    let pair = match entry.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(SimulationError::malformed(format!("expected [number, color], got {}", entry))),
    };

    let number = pair[0]
        .as_i64()
        .ok_or_else(|| SimulationError::malformed(format!("number must be an integer, got {}", pair[0])))?;
    let color: Color = pair[1]
        .as_str()
        .ok_or_else(|| SimulationError::malformed(format!("color must be a string, got {}", pair[1])))?
        .parse()?;

    Outcome::new(number, color)
}
