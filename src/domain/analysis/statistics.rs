//! Rolling statistics per column over the analysis window.
//!
//! All four measures are computed from scratch on every call; nothing is
//! carried between spins apart from the window itself.

use super::per_column::PerColumn;
use crate::domain::roulette::{Column, Outcome};
use serde::{Deserialize, Serialize};

/// Filtered positions below this offset are left out of the old-streak scan.
pub const DEFAULT_OLD_STREAK_CUTOFF: usize = 5;

/// Runs shorter than this are not streaks.
const MIN_STREAK_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub frequency: PerColumn<usize>,
    pub delay: PerColumn<usize>,
    pub recent_streak: PerColumn<usize>,
    pub old_streak: PerColumn<usize>,
    pub window_length: usize,
}

impl StatisticsSnapshot {
    pub fn compute(window: &[Outcome], old_streak_cutoff: usize) -> Self {
        Self {
            frequency: frequencies(window),
            delay: delays(window),
            recent_streak: recent_streaks(window),
            old_streak: old_streaks(window, old_streak_cutoff),
            window_length: window.len(),
        }
    }
}

/// Hits per column across the whole window. House numbers count nowhere.
pub fn frequencies(window: &[Outcome]) -> PerColumn<usize> {
    let mut counts = PerColumn::splat(0);
    for column in window.iter().filter_map(Outcome::column) {
        counts[column] += 1;
    }
    counts
}

/// Distance from the end of the window to each column's last hit.
///
/// `window_length - last_index`, so a hit on the newest outcome is a delay
/// of 1. A column absent from the window gets the window length.
pub fn delays(window: &[Outcome]) -> PerColumn<usize> {
    let len = window.len();
    let mut last_seen: PerColumn<Option<usize>> = PerColumn::splat(None);
    for (i, outcome) in window.iter().enumerate() {
        if let Some(column) = outcome.column() {
            last_seen[column] = Some(i);
        }
    }
    PerColumn::from_fn(|column| match last_seen[column] {
        Some(i) => len - i,
        None => len,
    })
}

/// Length of the last qualifying run seen for each column.
///
/// A later run overwrites an earlier one even when it is shorter.
pub fn recent_streaks(window: &[Outcome]) -> PerColumn<usize> {
    let mut streaks = PerColumn::splat(0);
    for (column, len) in qualifying_runs(window.iter().filter_map(Outcome::column)) {
        streaks[column] = len;
    }
    streaks
}

/// Sum of qualifying run lengths per column, skipping the first `cutoff`
/// non-house outcomes.
pub fn old_streaks(window: &[Outcome], cutoff: usize) -> PerColumn<usize> {
    let mut streaks = PerColumn::splat(0);
    let columns = window.iter().filter_map(Outcome::column).skip(cutoff);
    for (column, len) in qualifying_runs(columns) {
        streaks[column] += len;
    }
    streaks
}

/// Maximal same-column runs of at least [`MIN_STREAK_LEN`], in scan order.
fn qualifying_runs(columns: impl Iterator<Item = Column>) -> Vec<(Column, usize)> {
    let mut runs = Vec::new();
    let mut current: Option<(Column, usize)> = None;

    for column in columns {
        current = match current {
            Some((c, len)) if c == column => Some((c, len + 1)),
            Some(run) => {
                if run.1 >= MIN_STREAK_LEN {
                    runs.push(run);
                }
                Some((column, 1))
            }
            None => Some((column, 1)),
        };
    }

    runs.extend(current.filter(|run| run.1 >= MIN_STREAK_LEN));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roulette::Color;

    fn window(numbers: &[i64]) -> Vec<Outcome> {
        numbers
            .iter()
            .map(|&n| {
                let color = if n == 0 { Color::Green } else { Color::Black };
                Outcome::new(n, color).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_window_defaults() {
        let snapshot = StatisticsSnapshot::compute(&[], DEFAULT_OLD_STREAK_CUTOFF);

        assert_eq!(snapshot.frequency, PerColumn::splat(0));
        assert_eq!(snapshot.delay, PerColumn::splat(0));
        assert_eq!(snapshot.recent_streak, PerColumn::splat(0));
        assert_eq!(snapshot.old_streak, PerColumn::splat(0));
    }

    #[test]
    fn test_frequency_skips_house_number() {
        let w = window(&[1, 0, 4, 2, 0, 36]);
        let freq = frequencies(&w);

        assert_eq!(freq, PerColumn::new(2, 1, 1));
        let zeros = w.iter().filter(|o| o.is_house()).count();
        assert_eq!(freq.total(), w.len() - zeros);
    }

    #[test]
    fn test_delay_counts_spins_since_last_hit() {
        // columns: 1st, 2nd, 1st, 0
        let w = window(&[1, 2, 7, 0]);
        let delay = delays(&w);

        assert_eq!(delay[Column::First], 2);
        assert_eq!(delay[Column::Second], 3);
        assert_eq!(delay[Column::Third], 4);
    }

    #[test]
    fn test_delay_one_for_newest_hit() {
        let w = window(&[3, 5, 9]);
        let delay = delays(&w);

        assert_eq!(delay[Column::Third], 1);
        for (_, d) in delay.iter() {
            assert!((1..=w.len()).contains(d));
        }
    }

    #[test]
    fn test_delay_counts_from_window_end() {
        let delay = delays(&window(&[1, 2, 3]));
        assert_eq!(delay, PerColumn::new(3, 2, 1));
    }

    #[test]
    fn test_recent_streak_last_run_wins() {
        // First column runs of 3 then 2: the later, shorter run is reported
        let w = window(&[1, 4, 7, 2, 10, 13, 3]);
        let recent = recent_streaks(&w);

        assert_eq!(recent[Column::First], 2);
        assert_eq!(recent[Column::Second], 0);
        assert_eq!(recent[Column::Third], 0);
    }

    #[test]
    fn test_recent_streak_bridges_house_numbers() {
        let w = window(&[2, 0, 5, 0, 8]);
        assert_eq!(recent_streaks(&w)[Column::Second], 3);
    }

    #[test]
    fn test_single_hits_are_not_streaks() {
        let w = window(&[1, 2, 1, 2, 1, 2]);
        assert_eq!(recent_streaks(&w), PerColumn::splat(0));
        assert_eq!(old_streaks(&w, 0), PerColumn::splat(0));
    }

    #[test]
    fn test_old_streak_accumulates_past_cutoff() {
        // the first five filtered entries are skipped:
        // 3 3 3 3 3 | 1 1 2 1 1 1
        let w = window(&[3, 6, 9, 12, 15, 1, 4, 2, 7, 10, 13]);
        let old = old_streaks(&w, DEFAULT_OLD_STREAK_CUTOFF);

        assert_eq!(old[Column::First], 2 + 3);
        assert_eq!(old[Column::Second], 0);
        assert_eq!(old[Column::Third], 0);
    }

    #[test]
    fn test_old_streak_cutoff_applies_after_filtering_zeros() {
        // zeros are removed before the cutoff is applied
        let w = window(&[0, 0, 0, 1, 4, 2, 2]);
        assert_eq!(old_streaks(&w, 2), PerColumn::new(0, 2, 0));
    }
}
