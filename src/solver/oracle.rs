//! Oracle interface
//!
//! The oracle is whoever knows the secret. The solver hands it a guess and
//! gets back feedback, a solved signal, or a request to stop.

use crate::core::{Code, Feedback, score};

/// Answer from an oracle for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleResult {
    /// Score of the guess against the secret
    Feedback(Feedback),
    /// The guess is the secret
    Solved,
    /// The oracle declined to continue
    Abort,
}

/// Source of feedback for proposed guesses
///
/// Closures of the form `FnMut(&Code) -> OracleResult` are oracles too.
pub trait Oracle {
    /// Evaluate a guess against the secret
    fn evaluate(&mut self, guess: &Code) -> OracleResult;
}

impl<F> Oracle for F
where
    F: FnMut(&Code) -> OracleResult,
{
    fn evaluate(&mut self, guess: &Code) -> OracleResult {
        self(guess)
    }
}

/// Oracle that scores guesses against a known secret
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback};
/// use mastermind_solver::solver::{Oracle, OracleResult, SecretOracle};
///
/// let secret: Code = "BG".parse().unwrap();
/// let mut oracle = SecretOracle::new(secret);
///
/// assert_eq!(
///     oracle.evaluate(&"YY".parse().unwrap()),
///     OracleResult::Feedback(Feedback::new(0, 0))
/// );
/// assert_eq!(oracle.evaluate(&secret), OracleResult::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct SecretOracle {
    secret: Code,
    evaluations: usize,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            evaluations: 0,
        }
    }

    /// The secret being guessed
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// How many guesses have been evaluated so far
    #[must_use]
    pub const fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl Oracle for SecretOracle {
    fn evaluate(&mut self, guess: &Code) -> OracleResult {
        self.evaluations += 1;
        match score(guess, &self.secret) {
            Ok(feedback) if feedback.is_solved(self.secret.length()) => OracleResult::Solved,
            Ok(feedback) => OracleResult::Feedback(feedback),
            // A guess of the wrong length can never be the secret
            Err(_) => OracleResult::Abort,
        }
    }
}
