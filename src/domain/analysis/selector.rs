use super::per_column::PerColumn;
use super::statistics::StatisticsSnapshot;
use super::weights::WeightSet;
use crate::domain::roulette::Column;
use serde::{Deserialize, Serialize};

/// The two columns to bet on for the next spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSelection {
    /// Highest score first.
    pub columns: [Column; 2],
    /// Scores rounded to two decimals, for display only.
    pub scores: PerColumn<f64>,
}

impl ColumnSelection {
    pub fn covers(&self, column: Option<Column>) -> bool {
        column.is_some_and(|c| self.columns.contains(&c))
    }
}

/// Score every column and keep the best two.
///
/// `score = w_f*freq + w_d/(delay+1) - w_r*recent + w_o*old`. Ties keep
/// column order. Ranking uses the unrounded scores.
pub fn select_columns(
    frequency: &PerColumn<usize>,
    delay: &PerColumn<usize>,
    recent_streak: &PerColumn<usize>,
    old_streak: &PerColumn<usize>,
    weights: &WeightSet,
) -> ColumnSelection {
    let raw = PerColumn::from_fn(|c| {
        weights.frequency * frequency[c] as f64
            + weights.delay * (1.0 / (delay[c] as f64 + 1.0))
            - weights.recent_repeat * recent_streak[c] as f64
            + weights.old_repeat * old_streak[c] as f64
    });

    let mut ranked = Column::ALL;
    // stable: equal scores keep First < Second < Third
    ranked.sort_by(|a, b| raw[*b].total_cmp(&raw[*a]));

    ColumnSelection {
        columns: [ranked[0], ranked[1]],
        scores: PerColumn::from_fn(|c| round_2dp(raw[c])),
    }
}

impl StatisticsSnapshot {
    pub fn select(&self, weights: &WeightSet) -> ColumnSelection {
        select_columns(
            &self.frequency,
            &self.delay,
            &self.recent_streak,
            &self.old_streak,
            weights,
        )
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
