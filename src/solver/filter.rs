//! Constraint-filter strategy
//!
//! Keeps a candidate set over the whole codespace. Every answer from the
//! oracle eliminates the codes that could not have produced it, and the next
//! guess is the lowest-index code still standing.

use super::candidates::CandidateSet;
use super::strategy::Strategy;
use crate::core::{Code, CodeLength, Feedback, decode};

/// Set-narrowing strategy with a deterministic smallest-index pick
#[derive(Debug, Clone)]
pub struct ConstraintFilter {
    length: CodeLength,
    candidates: CandidateSet,
    current: Option<Code>,
}

impl ConstraintFilter {
    #[must_use]
    pub fn new(length: CodeLength) -> Self {
        Self {
            length,
            candidates: CandidateSet::for_length(length),
            current: Some(Code::first(length)),
        }
    }

    /// The candidate set after all feedback received so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}

/// Eliminate the guess and every candidate inconsistent with its feedback
///
/// Shared by the filter and minimax strategies.
pub(super) fn narrow(candidates: &mut CandidateSet, guess: &Code, feedback: Feedback) {
    candidates.eliminate(crate::core::encode(guess).get());
    candidates.retain_consistent(guess, feedback);
}

impl Strategy for ConstraintFilter {
    fn next_guess(&self) -> Option<Code> {
        self.current
    }

    fn record(&mut self, feedback: Feedback) {
        let Some(guess) = self.current else {
            return;
        };
        narrow(&mut self.candidates, &guess, feedback);
        self.current = self
            .candidates
            .first_candidate()
            .and_then(|index| decode(index, self.length).ok());
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.candidates.remaining())
    }

    fn length(&self) -> CodeLength {
        self.length
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}
