use super::{StakingPlan, capped};
use rust_decimal::Decimal;
use std::collections::VecDeque;

const SEED_UNITS: [u32; 3] = [1, 2, 3];

/// Cancellation system: stake first + last of the line, cross both off on a
/// win, write the lost stake at the end on a loss.
#[derive(Debug, Clone, PartialEq)]
pub struct LabouchereStaking {
    base: Decimal,
    line: VecDeque<Decimal>,
}

impl LabouchereStaking {
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            line: Self::seed(base),
        }
    }

    fn seed(base: Decimal) -> VecDeque<Decimal> {
        SEED_UNITS.iter().map(|&u| base * Decimal::from(u)).collect()
    }

    pub fn line(&self) -> &VecDeque<Decimal> {
        &self.line
    }
}

impl StakingPlan for LabouchereStaking {
    fn name(&self) -> &str {
        "Labouchere"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        if self.line.is_empty() {
            self.line = Self::seed(self.base);
        }
        // a single entry is staked as first + last of itself
        let first = self.line.front().copied().unwrap_or(self.base);
        let last = self.line.back().copied().unwrap_or(self.base);
        capped(first.checked_add(last).unwrap_or(Decimal::MAX), bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {
        if self.line.len() > 1 {
            self.line.pop_front();
            self.line.pop_back();
        } else {
            self.line.clear();
        }
    }

    fn on_loss(&mut self, wager: Decimal) {
        self.line.push_back(wager);
    }
}
