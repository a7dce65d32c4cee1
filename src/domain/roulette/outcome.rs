use super::column::Column;
use crate::domain::errors::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HOUSE_NUMBER: u8 = 0;
pub const MAX_NUMBER: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl FromStr for Color {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" | "vermelho" => Ok(Color::Red),
            "black" | "preto" => Ok(Color::Black),
            "green" | "verde" => Ok(Color::Green),
            other => Err(SimulationError::malformed(format!(
                "unknown color label '{}'. Valid: red, black, green",
                other
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// A recorded spin result. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    number: u8,
    color: Color,
}

impl Outcome {
    /// Build an outcome, rejecting numbers outside 0-36.
    pub fn new(number: i64, color: Color) -> Result<Self, SimulationError> {
        if !(0..=MAX_NUMBER as i64).contains(&number) {
            return Err(SimulationError::malformed(format!(
                "number {} is outside 0-{}",
                number, MAX_NUMBER
            )));
        }
        Ok(Self {
            number: number as u8,
            color,
        })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn column(&self) -> Option<Column> {
        Column::of(self.number)
    }

    pub fn is_house(&self) -> bool {
        self.number == HOUSE_NUMBER
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.color)
    }
}
