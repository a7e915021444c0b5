//! Minimax-based guess selection
//!
//! Scores every code of the codespace, not only the live candidates, and
//! keeps the one whose worst answer leaves the fewest possibilities.

use super::calculator::worst_case;
use crate::core::Code;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// `universe` is the full codespace in index order, `live` the codes still
/// possible and `candidates` the set they were drawn from. Ties on the worst
/// case prefer a guess that could itself be the secret, then the lower index.
///
/// Returns the chosen code and its worst case, or `None` if `universe` is
/// empty. Evaluation runs in parallel and only reads its inputs.
#[must_use]
pub fn select_best_guess(
    universe: &[Code],
    live: &[Code],
    candidates: &CandidateSet,
) -> Option<(Code, usize)> {
    universe
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, worst_case(guess, live)))
        .min_by_key(|&(index, worst)| (worst, !candidates.is_candidate(index), index))
        .map(|(index, worst)| (universe[index], worst))
}
