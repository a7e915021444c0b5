//! Guess selection strategies
//!
//! Defines the Strategy trait and the runtime-selectable wrapper over the
//! concrete implementations.

use super::{BruteForce, ConstraintFilter, Minimax};
use crate::core::{Code, CodeLength, Feedback};
use std::fmt;

/// A stateful guesser driven by oracle feedback
///
/// The session asks for [`Strategy::next_guess`], sends it to the oracle and
/// reports the answer back through [`Strategy::record`]. A strategy that
/// returns `None` has run out of possible codes.
pub trait Strategy {
    /// The guess to play this round, or `None` when exhausted
    fn next_guess(&self) -> Option<Code>;

    /// Apply the feedback received for the current guess and move on
    fn record(&mut self, feedback: Feedback);

    /// Number of codes still possible, if the strategy tracks them
    fn remaining(&self) -> Option<usize>;

    /// Code length this strategy plays
    fn length(&self) -> CodeLength;

    /// Short display name
    fn name(&self) -> &'static str;
}

/// Which strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Try every code in index order
    BruteForce,
    /// Guess the smallest code consistent with all feedback so far
    ConstraintFilter,
    /// Knuth's worst-case minimization (default)
    #[default]
    Minimax,
}

impl StrategyKind {
    /// Every strategy, in increasing order of sophistication
    pub const ALL: [Self; 3] = [Self::BruteForce, Self::ConstraintFilter, Self::Minimax];

    /// Look up a strategy by name
    ///
    /// Supported names: "brute-force", "brute", "b", "filter",
    /// "constraint-filter", "bitset", "i", "minimax", "knuth", "k".
    /// Matching is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::StrategyKind;
    ///
    /// assert_eq!(StrategyKind::from_name("knuth"), Some(StrategyKind::Minimax));
    /// assert_eq!(StrategyKind::from_name("B"), Some(StrategyKind::BruteForce));
    /// assert_eq!(StrategyKind::from_name("entropy"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute" | "b" => Some(Self::BruteForce),
            "filter" | "constraint-filter" | "bitset" | "i" => Some(Self::ConstraintFilter),
            "minimax" | "knuth" | "k" => Some(Self::Minimax),
            _ => None,
        }
    }

    /// Canonical name, accepted by [`StrategyKind::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::ConstraintFilter => "filter",
            Self::Minimax => "minimax",
        }
    }

    /// Build a fresh strategy for codes of the given length
    #[must_use]
    pub fn build(self, length: CodeLength) -> StrategyType {
        match self {
            Self::BruteForce => StrategyType::BruteForce(BruteForce::new(length)),
            Self::ConstraintFilter => StrategyType::ConstraintFilter(ConstraintFilter::new(length)),
            Self::Minimax => StrategyType::Minimax(Minimax::new(length)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    BruteForce(BruteForce),
    ConstraintFilter(ConstraintFilter),
    Minimax(Minimax),
}

impl Strategy for StrategyType {
    fn next_guess(&self) -> Option<Code> {
        match self {
            Self::BruteForce(s) => s.next_guess(),
            Self::ConstraintFilter(s) => s.next_guess(),
            Self::Minimax(s) => s.next_guess(),
        }
    }

    fn record(&mut self, feedback: Feedback) {
        match self {
            Self::BruteForce(s) => s.record(feedback),
            Self::ConstraintFilter(s) => s.record(feedback),
            Self::Minimax(s) => s.record(feedback),
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self {
            Self::BruteForce(s) => s.remaining(),
            Self::ConstraintFilter(s) => s.remaining(),
            Self::Minimax(s) => s.remaining(),
        }
    }

    fn length(&self) -> CodeLength {
        match self {
            Self::BruteForce(s) => s.length(),
            Self::ConstraintFilter(s) => s.length(),
            Self::Minimax(s) => s.length(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::BruteForce(s) => s.name(),
            Self::ConstraintFilter(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(StrategyKind::from_name("brute"), Some(StrategyKind::BruteForce));
        assert_eq!(StrategyKind::from_name("i"), Some(StrategyKind::ConstraintFilter));
        assert_eq!(StrategyKind::from_name("bitset"), Some(StrategyKind::ConstraintFilter));
        assert_eq!(StrategyKind::from_name(" Knuth "), Some(StrategyKind::Minimax));
        assert_eq!(StrategyKind::from_name(""), None);
    }

    #[test]
    fn default_is_minimax() {
        assert_eq!(StrategyKind::default(), StrategyKind::Minimax);
    }

    #[test]
    fn built_strategies_report_their_name_and_length() {
        let length = CodeLength::new(3).unwrap();
        for kind in StrategyKind::ALL {
            let strategy = kind.build(length);
            assert_eq!(strategy.name(), kind.name());
            assert_eq!(strategy.length(), length);
            assert!(strategy.next_guess().is_some());
        }
    }
}
