//! Session driver
//!
//! Runs one game: ask the strategy for a guess, hand it to the oracle, feed
//! the answer back, and repeat until the code is found, the strategy runs
//! out of codes, or the oracle stops.

use super::oracle::{Oracle, OracleResult};
use super::strategy::{Strategy, StrategyKind, StrategyType};
use crate::core::{Code, CodeLength, Feedback};
use crate::error::SolverError;

/// Settings for a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub code_length: CodeLength,
    pub strategy: StrategyKind,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(code_length: CodeLength, strategy: StrategyKind) -> Self {
        Self {
            code_length,
            strategy,
        }
    }

    /// Build a fresh session for these settings
    #[must_use]
    pub fn build_session(&self) -> Session<StrategyType> {
        Session::new(self.strategy.build(self.code_length))
    }
}

impl Default for SessionConfig {
    /// Four pegs, minimax
    fn default() -> Self {
        Self::new(CodeLength::ALL[2], StrategyKind::Minimax)
    }
}

/// One guess and the answer it got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates before the feedback was applied, if the strategy tracks them
    pub candidates_before: Option<usize>,
    /// Candidates after the feedback was applied
    pub candidates_after: Option<usize>,
}

impl Round {
    /// Whether this round found the secret
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.feedback.is_solved(self.guess.length())
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The oracle confirmed this code
    Solved(Code),
    /// No code is consistent with the feedback received
    Exhausted,
    /// The oracle stopped the game
    Aborted,
}

impl Outcome {
    /// The secret, if it was found
    #[must_use]
    pub const fn solution(&self) -> Option<Code> {
        match self {
            Self::Solved(code) => Some(*code),
            Self::Exhausted | Self::Aborted => None,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// A single game between a strategy and an oracle
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, CodeLength};
/// use mastermind_solver::solver::{Outcome, SecretOracle, SessionConfig, StrategyKind};
///
/// let secret: Code = "RPGY".parse().unwrap();
/// let config = SessionConfig::new(CodeLength::new(4).unwrap(), StrategyKind::Minimax);
/// let mut session = config.build_session();
///
/// let outcome = session.run(&mut SecretOracle::new(secret)).unwrap();
/// assert_eq!(outcome, Outcome::Solved(secret));
/// assert!(session.history().len() <= 5);
/// ```
#[derive(Debug, Clone)]
pub struct Session<S: Strategy> {
    strategy: S,
    history: Vec<Round>,
}

impl<S: Strategy> Session<S> {
    #[must_use]
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            history: Vec::new(),
        }
    }

    /// Play until solved, exhausted or aborted
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidFeedback`] if the oracle answers with
    /// counts that cannot occur for this code length.
    pub fn run<O: Oracle + ?Sized>(&mut self, oracle: &mut O) -> Result<Outcome, SolverError> {
        self.run_with(oracle, |_| {})
    }

    /// Play like [`Session::run`], handing every round to `observer`
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidFeedback`] if the oracle answers with
    /// counts that cannot occur for this code length.
    pub fn run_with<O, F>(&mut self, oracle: &mut O, mut observer: F) -> Result<Outcome, SolverError>
    where
        O: Oracle + ?Sized,
        F: FnMut(&Round),
    {
        let length = self.strategy.length();

        loop {
            let Some(guess) = self.strategy.next_guess() else {
                return Ok(Outcome::Exhausted);
            };
            let candidates_before = self.strategy.remaining();

            let feedback = match oracle.evaluate(&guess) {
                OracleResult::Abort => return Ok(Outcome::Aborted),
                OracleResult::Solved => Feedback::solved(length),
                OracleResult::Feedback(feedback) => feedback.validate(length)?,
            };

            if feedback.is_solved(length) {
                let round = Round {
                    guess,
                    feedback,
                    candidates_before,
                    candidates_after: candidates_before.map(|_| 1),
                };
                observer(&round);
                self.history.push(round);
                return Ok(Outcome::Solved(guess));
            }

            self.strategy.record(feedback);

            let round = Round {
                guess,
                feedback,
                candidates_before,
                candidates_after: self.strategy.remaining(),
            };
            observer(&round);
            self.history.push(round);
        }
    }

    /// Rounds played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// The strategy driving this session
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
