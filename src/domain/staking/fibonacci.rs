use super::{StakingPlan, capped};
use rust_decimal::Decimal;

/// Walks the Fibonacci sequence in base-wager units: one step forward per
/// loss, two back per win.
#[derive(Debug, Clone, PartialEq)]
pub struct FibonacciStaking {
    base: Decimal,
    sequence: Vec<Decimal>,
    index: usize,
}

impl FibonacciStaking {
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            sequence: vec![Decimal::ONE, Decimal::ONE],
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn units(&self) -> Decimal {
        self.sequence[self.index]
    }
}

impl StakingPlan for FibonacciStaking {
    fn name(&self) -> &str {
        "Fibonacci"
    }

    fn next_wager(&mut self, bankroll: Decimal) -> Decimal {
        let wager = self.base.checked_mul(self.units()).unwrap_or(Decimal::MAX);
        capped(wager, bankroll)
    }

    fn on_win(&mut self, _wager: Decimal) {
        self.index = self.index.saturating_sub(2);
    }

    fn on_loss(&mut self, _wager: Decimal) {
        self.index += 1;
        while self.index >= self.sequence.len() {
            let n = self.sequence.len();
            let next = self.sequence[n - 1]
                .checked_add(self.sequence[n - 2])
                .unwrap_or(Decimal::MAX);
            self.sequence.push(next);
        }
    }
}
