use super::{StakingPlan, capped};
use rust_decimal::Decimal;

/// One unit up after a loss, one unit down (never below base) after a win.
#[derive(Debug, Clone, PartialEq)]
pub struct DAlembertStaking {
    base: Decimal,
    current: Decimal,
}

impl DAlembertStaking {
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            current: base,
        }
    }
}

impl StakingPlan for DAlembertStaking {
    fn name(&self) -> &str {
        "DAlembert"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        capped(self.current, bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {
        self.current = self.base.max(self.current - self.base);
    }

    fn on_loss(&mut self, _wager: Decimal) {
        self.current = self
            .current
            .checked_add(self.base)
            .unwrap_or(Decimal::MAX);
    }
}
