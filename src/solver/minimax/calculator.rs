//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and the codes still possible, computes how many of them
//! could survive the worst answer the oracle might give.

use crate::core::{Code, Feedback, score_pegs};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the size of the largest feedback bucket, i.e. the number of
/// candidates left after the least informative answer.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, CodeLength, enumerate};
/// use mastermind_solver::solver::minimax::worst_case;
///
/// let all: Vec<Code> = enumerate(CodeLength::new(2).unwrap()).collect();
/// let guess: Code = "YY".parse().unwrap();
///
/// // Against every 2-peg code, "no yellow" is the biggest bucket
/// assert_eq!(worst_case(&guess, &all), 25);
/// ```
#[must_use]
pub fn worst_case(guess: &Code, candidates: &[Code]) -> usize {
    let mut counts = [0u32; Feedback::BUCKETS];
    for candidate in candidates {
        counts[score_pegs(guess.pegs(), candidate.pegs()).bucket()] += 1;
    }
    counts.into_iter().max().unwrap_or(0) as usize
}

/// Group candidates by the feedback they produce with the guess
///
/// Buckets that no candidate falls into are absent from the map.
#[must_use]
pub fn partition(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = score_pegs(guess.pegs(), candidate.pegs());
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
