use crate::domain::history::SpinRecord;
use crate::domain::staking::BetResult;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Summary statistics of one run's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    // Returns
    pub net_gain: Decimal,
    pub return_pct: f64,

    // Spin Statistics
    pub spins_played: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,

    // Bankroll Path
    pub peak_bankroll: Decimal,
    pub lowest_bankroll: Decimal,
    pub max_drawdown_pct: f64,

    // Stakes
    pub total_wagered: Decimal,
    pub largest_wager: Decimal,

    // Consecutive Results
    pub max_consecutive_wins: usize,
    pub max_consecutive_losses: usize,
}

impl PerformanceMetrics {
    /// Calculate metrics from a history record.
    ///
    /// # Arguments
    /// * `history` - Played spins in order
    /// * `initial_bankroll` - Bankroll before the first spin
    pub fn calculate(history: &[SpinRecord], initial_bankroll: Decimal) -> Self {
        let final_bankroll = history
            .last()
            .map(|r| r.bankroll_after)
            .unwrap_or(initial_bankroll);
        let net_gain = final_bankroll - initial_bankroll;
        let return_pct = if initial_bankroll.is_zero() {
            0.0
        } else {
            (net_gain / initial_bankroll).to_f64().unwrap_or(0.0) * 100.0
        };

        let wins = history
            .iter()
            .filter(|r| r.result == BetResult::Win)
            .count();
        let losses = history.len() - wins;
        let win_rate = if history.is_empty() {
            0.0
        } else {
            wins as f64 / history.len() as f64
        };

        let mut curve = Vec::with_capacity(history.len() + 1);
        curve.push(initial_bankroll);
        curve.extend(history.iter().map(|r| r.bankroll_after));

        let (max_consecutive_wins, max_consecutive_losses) =
            Self::calculate_consecutive_streaks(history);

        Self {
            net_gain,
            return_pct,
            spins_played: history.len(),
            wins,
            losses,
            win_rate,
            peak_bankroll: curve.iter().copied().max().unwrap_or(initial_bankroll),
            lowest_bankroll: curve.iter().copied().min().unwrap_or(initial_bankroll),
            max_drawdown_pct: Self::calculate_max_drawdown(&curve),
            total_wagered: history.iter().map(|r| r.wager).sum(),
            largest_wager: history
                .iter()
                .map(|r| r.wager)
                .max()
                .unwrap_or(Decimal::ZERO),
            max_consecutive_wins,
            max_consecutive_losses,
        }
    }

    /// Deepest peak-to-trough fall, as a negative percentage.
    fn calculate_max_drawdown(bankroll_curve: &[Decimal]) -> f64 {
        let mut max_dd = 0.0;
        let mut peak = Decimal::ZERO;

        for &bankroll in bankroll_curve {
            if bankroll > peak {
                peak = bankroll;
            }

            if peak > Decimal::ZERO {
                let drawdown_pct = (bankroll - peak)
                    .checked_div(peak)
                    .and_then(|d| d.to_f64())
                    .unwrap_or(0.0)
                    * 100.0;
                if drawdown_pct < max_dd {
                    max_dd = drawdown_pct;
                }
            }
        }

        max_dd
    }

    fn calculate_consecutive_streaks(history: &[SpinRecord]) -> (usize, usize) {
        let mut max_wins = 0;
        let mut max_losses = 0;
        let mut current_wins = 0;
        let mut current_losses = 0;

        for record in history {
            match record.result {
                BetResult::Win => {
                    current_wins += 1;
                    current_losses = 0;
                    max_wins = max_wins.max(current_wins);
                }
                BetResult::Loss => {
                    current_losses += 1;
                    current_wins = 0;
                    max_losses = max_losses.max(current_losses);
                }
            }
        }

        (max_wins, max_losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::Weighting;
    use crate::domain::roulette::Column;
    use rust_decimal_macros::dec;

    fn record(spin: usize, result: BetResult, wager: Decimal, bankroll_after: Decimal) -> SpinRecord {
        SpinRecord {
            spin,
            number: 1,
            result,
            wager,
            bankroll_after,
            columns: [Column::First, Column::Second],
            weighting: Weighting::Fixed,
        }
    }

    #[test]
    fn test_metrics_with_mixed_results() {
        let history = vec![
            record(1, BetResult::Loss, dec!(1), dec!(9)),
            record(2, BetResult::Loss, dec!(2), dec!(7)),
            record(3, BetResult::Win, dec!(4), dec!(9)),
            record(4, BetResult::Win, dec!(1), dec!(9.5)),
        ];

        let metrics = PerformanceMetrics::calculate(&history, dec!(10));

        assert_eq!(metrics.spins_played, 4);
        assert_eq!(metrics.wins, 2);
        assert_eq!(metrics.losses, 2);
        assert_eq!(metrics.win_rate, 0.5);
        assert_eq!(metrics.net_gain, dec!(-0.5));
        assert_eq!(metrics.peak_bankroll, dec!(10));
        assert_eq!(metrics.lowest_bankroll, dec!(7));
        assert!((metrics.max_drawdown_pct + 30.0).abs() < 1e-9);
        assert_eq!(metrics.total_wagered, dec!(8));
        assert_eq!(metrics.largest_wager, dec!(4));
        assert_eq!(metrics.max_consecutive_wins, 2);
        assert_eq!(metrics.max_consecutive_losses, 2);
    }

    #[test]
    fn test_empty_history() {
        let metrics = PerformanceMetrics::calculate(&[], dec!(10));

        assert_eq!(metrics.spins_played, 0);
        assert_eq!(metrics.net_gain, Decimal::ZERO);
        assert_eq!(metrics.peak_bankroll, dec!(10));
        assert_eq!(metrics.max_drawdown_pct, 0.0);
        assert_eq!(metrics.win_rate, 0.0);
    }
}
