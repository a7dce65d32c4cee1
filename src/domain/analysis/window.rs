use crate::domain::roulette::Outcome;

/// Fixed-size window of the most recent outcomes, oldest first.
///
/// Only the simulator mutates it, once per played spin, through [`slide`].
///
/// [`slide`]: AnalysisWindow::slide
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWindow {
    outcomes: Vec<Outcome>,
}

impl AnalysisWindow {
    pub fn new(seed: &[Outcome]) -> Self {
        Self {
            outcomes: seed.to_vec(),
        }
    }

    /// Evict the oldest outcome and append `latest`. Length never changes.
    pub fn slide(&mut self, latest: Outcome) {
        if self.outcomes.is_empty() {
            return;
        }
        // the evicted element rotates into the last slot and is overwritten
        self.outcomes.rotate_left(1);
        if let Some(slot) = self.outcomes.last_mut() {
            *slot = latest;
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roulette::Color;

    fn spins(numbers: &[i64]) -> Vec<Outcome> {
        numbers
            .iter()
            .map(|&n| Outcome::new(n, Color::Red).unwrap())
            .collect()
    }

    #[test]
    fn test_slide_evicts_oldest() {
        let mut window = AnalysisWindow::new(&spins(&[1, 2, 3]));
        window.slide(spins(&[4])[0]);

        let numbers: Vec<u8> = window.outcomes().iter().map(|o| o.number()).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_slide_on_empty_window_is_noop() {
        let mut window = AnalysisWindow::new(&[]);
        window.slide(spins(&[7])[0]);
        assert!(window.is_empty());
    }
}
