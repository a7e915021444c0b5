//! Brute-force enumeration
//!
//! Guesses every code in index order until the oracle confirms one. Uses no
//! candidate set and never scores anything itself.

use super::strategy::Strategy;
use crate::core::{Code, CodeLength, Feedback};

/// Exhaustive strategy walking the codespace in odometer order
///
/// States: guessing (`current` is `Some`), and exhausted once the odometer
/// wraps back to the first code. The solved state belongs to the session.
#[derive(Debug, Clone)]
pub struct BruteForce {
    length: CodeLength,
    current: Option<Code>,
}

impl BruteForce {
    #[must_use]
    pub const fn new(length: CodeLength) -> Self {
        Self {
            length,
            current: Some(Code::first(length)),
        }
    }
}

impl Strategy for BruteForce {
    fn next_guess(&self) -> Option<Code> {
        self.current
    }

    fn record(&mut self, _feedback: Feedback) {
        let wrapped = self.current.as_mut().is_some_and(Code::increment);
        if wrapped {
            self.current = None;
        }
    }

    fn remaining(&self) -> Option<usize> {
        None
    }

    fn length(&self) -> CodeLength {
        self.length
    }

    fn name(&self) -> &'static str {
        "brute-force"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{encode, enumerate};

    #[test]
    fn starts_at_first_code() {
        let length = CodeLength::new(3).unwrap();
        let strategy = BruteForce::new(length);
        assert_eq!(strategy.next_guess(), Some(Code::first(length)));
        assert_eq!(strategy.remaining(), None);
    }

    #[test]
    fn walks_codes_in_index_order_then_exhausts() {
        let length = CodeLength::new(2).unwrap();
        let mut strategy = BruteForce::new(length);

        for expected in enumerate(length) {
            let guess = strategy.next_guess().unwrap();
            assert_eq!(guess, expected);
            strategy.record(Feedback::new(0, 0));
        }

        assert_eq!(strategy.next_guess(), None);
        // Further feedback keeps it exhausted
        strategy.record(Feedback::new(0, 0));
        assert_eq!(strategy.next_guess(), None);
    }

    #[test]
    fn ignores_feedback_content() {
        let length = CodeLength::new(2).unwrap();
        let mut strategy = BruteForce::new(length);
        strategy.record(Feedback::new(1, 1));
        assert_eq!(encode(&strategy.next_guess().unwrap()).get(), 1);
    }
}
