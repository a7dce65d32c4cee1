use super::{StakingPlan, capped};
use rust_decimal::Decimal;

/// Double after every loss, back to base after a win.
#[derive(Debug, Clone, PartialEq)]
pub struct MartingaleStaking {
    base: Decimal,
    current: Decimal,
}

impl MartingaleStaking {
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            current: base,
        }
    }

    /// Uncapped progression value.
    pub fn current(&self) -> Decimal {
        self.current
    }
}

impl StakingPlan for MartingaleStaking {
    fn name(&self) -> &str {
        "Martingale"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        capped(self.current, bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {
        self.current = self.base;
    }

    fn on_loss(&mut self, _wager: Decimal) {
        self.current = self
            .current
            .checked_mul(Decimal::TWO)
            .unwrap_or(Decimal::MAX);
    }
}
