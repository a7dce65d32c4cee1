use super::{StakingPlan, capped};
use rust_decimal::Decimal;

/// Always the base wager.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatStaking {
    base: Decimal,
}

impl FlatStaking {
    pub fn new(base: Decimal) -> Self {
        Self { base }
    }
}

impl StakingPlan for FlatStaking {
    fn name(&self) -> &str {
        "Flat"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        capped(self.base, bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {}

    fn on_loss(&mut self, _wager: Decimal) {}
}
