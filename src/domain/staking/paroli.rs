use super::{StakingPlan, capped};
use rust_decimal::Decimal;

/// Press after wins: `base * 2^wins`, reset on the first loss.
#[derive(Debug, Clone, PartialEq)]
pub struct ParoliStaking {
    base: Decimal,
    consecutive_wins: u32,
}

const PAROLI_MULTIPLIER: Decimal = Decimal::TWO;

impl ParoliStaking {
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            consecutive_wins: 0,
        }
    }

    pub fn consecutive_wins(&self) -> u32 {
        self.consecutive_wins
    }
}

impl StakingPlan for ParoliStaking {
    fn name(&self) -> &str {
        "Paroli"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        let mut wager = self.base;
        for _ in 0..self.consecutive_wins {
            // stop pressing once the bankroll is covered
            if wager >= bankroll {
                break;
            }
            wager = wager.checked_mul(PAROLI_MULTIPLIER).unwrap_or(Decimal::MAX);
        }
        capped(wager, bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {
        self.consecutive_wins = self.consecutive_wins.saturating_add(1);
    }

    fn on_loss(&mut self, _wager: Decimal) {
        self.consecutive_wins = 0;
    }
}
