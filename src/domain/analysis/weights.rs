use super::per_column::PerColumn;
use super::statistics::StatisticsSnapshot;
use crate::domain::errors::SimulationError;
use serde::{Deserialize, Serialize};

const EMPTY_FREQUENCY_WEIGHT: f64 = 0.5;
const EMPTY_DELAY_WEIGHT: f64 = 0.3;
const EMPTY_RECENT_REPEAT_WEIGHT: f64 = -0.2;
const EMPTY_OLD_REPEAT_WEIGHT: f64 = 0.3;

/// Scoring weights for the column selector.
///
/// `recent_repeat` is stored with its sign; the selector subtracts
/// `recent_repeat * streak`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub frequency: f64,
    pub delay: f64,
    pub recent_repeat: f64,
    pub old_repeat: f64,
}

impl WeightSet {
    /// Weights used while the run is going smoothly.
    pub const FIXED: WeightSet = WeightSet {
        frequency: 0.7,
        delay: 0.3,
        recent_repeat: 0.0,
        old_repeat: 0.2,
    };

    pub fn from_snapshot(snapshot: &StatisticsSnapshot) -> Result<Self, SimulationError> {
        generate_weights(
            &snapshot.frequency,
            &snapshot.delay,
            &snapshot.recent_streak,
            &snapshot.old_streak,
            snapshot.window_length,
        )
    }

    pub fn magnitude(&self) -> f64 {
        self.frequency.abs() + self.delay.abs() + self.recent_repeat.abs() + self.old_repeat.abs()
    }
}

/// Derive weights from the current statistics, normalized so the absolute
/// values sum to 1.
///
/// # Errors
///
/// `DegenerateWeights` when every component is zero (or the sum is not a
/// finite number) before normalization.
pub fn generate_weights(
    frequency: &PerColumn<usize>,
    delay: &PerColumn<usize>,
    recent_streak: &PerColumn<usize>,
    old_streak: &PerColumn<usize>,
    window_length: usize,
) -> Result<WeightSet, SimulationError> {
    let total_frequency = frequency.total();
    let frequency_weight = if total_frequency > 0 {
        1.0 / (total_frequency as f64 + 1.0)
    } else {
        EMPTY_FREQUENCY_WEIGHT
    };

    let (delay_weight, recent_repeat_weight, old_repeat_weight) = if window_length > 0 {
        let len = window_length as f64;
        (
            delay.total() as f64 / len,
            -(recent_streak.total() as f64) / len,
            old_streak.total() as f64 / len,
        )
    } else {
        (
            EMPTY_DELAY_WEIGHT,
            EMPTY_RECENT_REPEAT_WEIGHT,
            EMPTY_OLD_REPEAT_WEIGHT,
        )
    };

    let raw = WeightSet {
        frequency: frequency_weight,
        delay: delay_weight,
        recent_repeat: recent_repeat_weight,
        old_repeat: old_repeat_weight,
    };
    let sum = raw.magnitude();
    if sum == 0.0 || !sum.is_finite() {
        tracing::warn!("Weight generation degenerate: {:?}", raw);
        return Err(SimulationError::DegenerateWeights);
    }

    Ok(WeightSet {
        frequency: raw.frequency / sum,
        delay: raw.delay / sum,
        recent_repeat: raw.recent_repeat / sum,
        old_repeat: raw.old_repeat / sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_generated_weights_are_normalized() {
        let weights = generate_weights(
            &PerColumn::new(10, 12, 6),
            &PerColumn::new(0, 2, 1),
            &PerColumn::new(3, 0, 2),
            &PerColumn::new(4, 2, 0),
            30,
        )
        .unwrap();

        assert!((weights.magnitude() - 1.0).abs() < EPS);
        assert!(weights.recent_repeat < 0.0);
        assert!(weights.frequency > 0.0);
    }

    #[test]
    fn test_known_values() {
        // freq total 2 -> 1/3, delay total 3/3 = 1, recent -3/3 = -1, old 0
        let weights = generate_weights(
            &PerColumn::new(2, 0, 0),
            &PerColumn::new(0, 3, 0),
            &PerColumn::new(3, 0, 0),
            &PerColumn::splat(0),
            3,
        )
        .unwrap();

        let sum = 1.0 / 3.0 + 1.0 + 1.0;
        assert!((weights.frequency - (1.0 / 3.0) / sum).abs() < EPS);
        assert!((weights.delay - 1.0 / sum).abs() < EPS);
        assert!((weights.recent_repeat + 1.0 / sum).abs() < EPS);
        assert_eq!(weights.old_repeat, 0.0);
    }

    #[test]
    fn test_empty_window_uses_default_branches() {
        let zero = PerColumn::splat(0);
        let weights = generate_weights(&zero, &zero, &zero, &zero, 0).unwrap();

        let sum = 0.5 + 0.3 + 0.2 + 0.3;
        assert!((weights.frequency - 0.5 / sum).abs() < EPS);
        assert!((weights.recent_repeat + 0.2 / sum).abs() < EPS);
        assert!((weights.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_all_house_window_still_has_frequency_weight() {
        // no column ever hit: frequency weight falls back to 0.5
        let weights = generate_weights(
            &PerColumn::splat(0),
            &PerColumn::splat(30),
            &PerColumn::splat(0),
            &PerColumn::splat(0),
            30,
        )
        .unwrap();

        assert!((weights.frequency - 0.5 / 3.5).abs() < EPS);
        assert!((weights.delay - 3.0 / 3.5).abs() < EPS);
    }

    #[test]
    fn test_from_snapshot_matches_direct_call() {
        let snapshot = StatisticsSnapshot {
            frequency: PerColumn::new(5, 3, 2),
            delay: PerColumn::new(0, 1, 4),
            recent_streak: PerColumn::new(2, 0, 0),
            old_streak: PerColumn::new(0, 0, 3),
            window_length: 10,
        };

        let direct = generate_weights(
            &snapshot.frequency,
            &snapshot.delay,
            &snapshot.recent_streak,
            &snapshot.old_streak,
            10,
        )
        .unwrap();
        assert_eq!(WeightSet::from_snapshot(&snapshot).unwrap(), direct);
    }
}
