//! Minimax (Knuth) strategy
//!
//! Opens with a fixed guess per code length, then picks whichever code of the
//! full codespace minimizes the worst-case number of surviving candidates.

mod calculator;
mod selector;

pub use calculator::{partition, worst_case};
pub use selector::select_best_guess;

use super::candidates::CandidateSet;
use super::filter::narrow;
use super::strategy::Strategy;
use crate::core::{Code, CodeLength, Feedback, enumerate};

/// Index of the fixed opening guess for a code length
///
/// `Y B`, `Y Y B`, `Y Y B B` and `Y Y Y B B` for lengths 2 through 5.
#[must_use]
pub const fn opening_index(length: CodeLength) -> usize {
    match length.get() {
        2 => 6,
        3 => 36,
        4 => 252,
        _ => 1512,
    }
}

/// Worst-case minimizing strategy
#[derive(Debug, Clone)]
pub struct Minimax {
    length: CodeLength,
    universe: Vec<Code>,
    candidates: CandidateSet,
    current: Option<Code>,
}

impl Minimax {
    #[must_use]
    pub fn new(length: CodeLength) -> Self {
        let universe: Vec<Code> = enumerate(length).collect();
        let current = universe.get(opening_index(length)).copied();
        Self {
            length,
            universe,
            candidates: CandidateSet::for_length(length),
            current,
        }
    }

    /// The candidate set after all feedback received so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    fn choose(&self) -> Option<Code> {
        let live: Vec<Code> = self
            .candidates
            .candidates()
            .map(|index| self.universe[index])
            .collect();

        match live.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => select_best_guess(&self.universe, &live, &self.candidates).map(|(guess, _)| guess),
        }
    }
}

impl Strategy for Minimax {
    fn next_guess(&self) -> Option<Code> {
        self.current
    }

    fn record(&mut self, feedback: Feedback) {
        let Some(guess) = self.current else {
            return;
        };
        narrow(&mut self.candidates, &guess, feedback);
        self.current = self.choose();
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.candidates.remaining())
    }

    fn length(&self) -> CodeLength {
        self.length
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{encode, score};

    fn length(pegs: usize) -> CodeLength {
        CodeLength::new(pegs).unwrap()
    }

    /// Play a game against a known secret, returning the guess count
    fn play(secret: &Code) -> Option<usize> {
        let len = secret.length();
        let mut strategy = Minimax::new(len);
        let mut guesses = 0;
        while let Some(guess) = strategy.next_guess() {
            guesses += 1;
            let feedback = score(&guess, secret).unwrap();
            if feedback.is_solved(len) {
                return Some(guesses);
            }
            strategy.record(feedback);
        }
        None
    }

    #[test]
    fn openings() {
        for (pegs, text) in [(2, "Y B"), (3, "Y Y B"), (4, "Y Y B B"), (5, "Y Y Y B B")] {
            let strategy = Minimax::new(length(pegs));
            let opening = strategy.next_guess().unwrap();
            assert_eq!(opening.to_string(), text);
            assert_eq!(encode(&opening).get(), opening_index(length(pegs)));
        }
        assert_eq!(opening_index(length(4)), 252);
    }

    #[test]
    fn solves_every_two_peg_secret() {
        for secret in enumerate(length(2)) {
            let guesses = play(&secret).unwrap();
            assert!(guesses <= 5, "{secret} took {guesses}");
        }
    }

    #[test]
    fn solves_every_three_peg_secret() {
        for secret in enumerate(length(3)) {
            assert!(play(&secret).is_some(), "{secret}");
        }
    }

    #[test]
    fn four_peg_samples_within_knuth_bound() {
        for text in ["YYYY", "BGRP", "OOOO", "RPYB", "GOGO", "PBBY"] {
            let secret: Code = text.parse().unwrap();
            let guesses = play(&secret).unwrap();
            assert!(guesses <= 6, "{secret} took {guesses}");
        }
    }

    #[test]
    fn single_candidate_is_guessed_directly() {
        let len = length(2);
        let mut strategy = Minimax::new(len);
        // Y B scored (2, 0) only fits Y B itself, which gets eliminated as
        // the guess. (0, 2) leaves exactly B Y.
        strategy.record(Feedback::new(0, 2));
        assert_eq!(strategy.remaining(), Some(1));
        assert_eq!(strategy.next_guess().unwrap().to_string(), "B Y");
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let mut strategy = Minimax::new(length(2));
        // Y B cannot score (1, 1) against any 2-peg code
        strategy.record(Feedback::new(1, 1));
        assert_eq!(strategy.remaining(), Some(0));
        assert_eq!(strategy.next_guess(), None);
    }
}
