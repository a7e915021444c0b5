//! Bit-indexed candidate universe
//!
//! One bit per code index. A clear bit means the code is still a possible
//! secret; a set bit means it has been eliminated. Bits are only ever set, so
//! the candidate universe shrinks monotonically over a session.

use crate::core::{Code, CodeLength, Feedback, enumerate, score_pegs};

const WORD_BITS: usize = u64::BITS as usize;

/// Dense membership set over a codespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    eliminated: Vec<u64>,
    universe: usize,
}

impl CandidateSet {
    /// Create a set where every index in `[0, universe)` is a candidate
    #[must_use]
    pub fn new(universe: usize) -> Self {
        Self {
            eliminated: vec![0; universe.div_ceil(WORD_BITS)],
            universe,
        }
    }

    /// Create a full-open set covering every code of the given length
    #[must_use]
    pub fn for_length(length: CodeLength) -> Self {
        Self::new(length.space_size())
    }

    /// Number of indices the set covers
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> usize {
        self.universe
    }

    /// Mark an index as no longer possible
    ///
    /// Idempotent. Indices outside the universe are ignored.
    #[inline]
    pub fn eliminate(&mut self, index: usize) {
        if index < self.universe {
            self.eliminated[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        }
    }

    /// Check whether an index is still a candidate
    ///
    /// Indices outside the universe are never candidates.
    #[inline]
    #[must_use]
    pub fn is_candidate(&self, index: usize) -> bool {
        index < self.universe && self.eliminated[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) == 0
    }

    /// Check whether at least one candidate remains
    #[must_use]
    pub fn any_remaining(&self) -> bool {
        self.first_candidate().is_some()
    }

    /// Number of candidates left
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.universe - self.eliminated.iter().map(|w| w.count_ones() as usize).sum::<usize>()
    }

    /// Smallest index that is still a candidate
    #[must_use]
    pub fn first_candidate(&self) -> Option<usize> {
        self.eliminated
            .iter()
            .enumerate()
            .find(|(_, word)| **word != u64::MAX)
            .map(|(i, word)| i * WORD_BITS + word.trailing_ones() as usize)
            .filter(|&index| index < self.universe)
    }

    /// Iterate over candidate indices in increasing order
    pub fn candidates(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.universe).filter(|&index| self.is_candidate(index))
    }

    /// Eliminate every candidate that would not have produced `feedback` for `guess`
    ///
    /// A code can only be the secret if scoring `guess` against it reproduces
    /// the feedback the oracle gave.
    pub fn retain_consistent(&mut self, guess: &Code, feedback: Feedback) {
        for (index, code) in enumerate(guess.length()).enumerate() {
            if self.is_candidate(index) && score_pegs(guess.pegs(), code.pegs()) != feedback {
                self.eliminate(index);
            }
        }
    }
}
