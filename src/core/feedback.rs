//! Mastermind feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - exact: pegs with the right color in the right position
//! - color only: remaining pegs whose color appears elsewhere in the secret
//!
//! Each reference peg is consumed by at most one match, so the counts never
//! exceed the code length between them.

use super::code::MAX_LENGTH;
use super::{Code, CodeLength, Color};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Score of a guess against a reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// Number of `(exact, color_only)` buckets for the longest code
    ///
    /// Used to size stack-allocated counters indexed by [`Feedback::bucket`].
    pub const BUCKETS: usize = (MAX_LENGTH + 1) * (MAX_LENGTH + 1);

    /// Create feedback without checking it against a code length
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// Create feedback that is possible for codes of `length` pegs
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidFeedback`] if `exact + color_only > N`.
    pub fn checked(exact: u8, color_only: u8, length: CodeLength) -> Result<Self, SolverError> {
        Self::new(exact, color_only).validate(length)
    }

    /// Check that this feedback can occur for codes of `length` pegs
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidFeedback`] if `exact + color_only > N`.
    pub fn validate(self, length: CodeLength) -> Result<Self, SolverError> {
        if usize::from(self.exact) + usize::from(self.color_only) > length.get() {
            return Err(SolverError::InvalidFeedback {
                exact: self.exact,
                color_only: self.color_only,
                length: length.get(),
            });
        }
        Ok(self)
    }

    /// Feedback meaning the secret was found: `(N, 0)`
    #[inline]
    #[must_use]
    pub const fn solved(length: CodeLength) -> Self {
        Self::new(length.get() as u8, 0)
    }

    /// Pegs right in both color and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs right in color only
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check if this feedback means the secret was found
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: CodeLength) -> bool {
        self.exact as usize == length.get() && self.color_only == 0
    }

    /// Dense bucket number in `[0, BUCKETS)`
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> usize {
        self.exact as usize * (MAX_LENGTH + 1) + self.color_only as usize
    }

    /// Every feedback that can occur for codes of `length` pegs
    ///
    /// Yields `(p, c)` for `0 <= p <= N` and `0 <= c <= N - p`.
    pub fn all(length: CodeLength) -> impl Iterator<Item = Self> {
        let pegs = length.get() as u8;
        (0..=pegs).flat_map(move |exact| (0..=pegs - exact).map(move |c| Self::new(exact, c)))
    }
}

impl FromStr for Feedback {
    type Err = SolverError;

    /// Parse feedback from two numbers such as `"1 2"`, `"1,2"` or `"1/2"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .collect();

        let [exact, color_only] = parts.as_slice() else {
            return Err(SolverError::ParseFeedback(s.to_string()));
        };

        let parse = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| SolverError::ParseFeedback(s.to_string()))
        };

        Ok(Self::new(parse(*exact)?, parse(*color_only)?))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color_only)
    }
}

/// Score `attempt` against `reference`
///
/// # Algorithm
/// 1. First pass: count exact matches and mark those reference pegs used
/// 2. Second pass: for each attempt peg that was not an exact match, take
///    the first unused reference peg of the same color (lowest position wins)
///
/// # Errors
/// Returns [`SolverError::ShapeMismatch`] if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback, score};
///
/// let guess: Code = "YYBB".parse().unwrap();
/// let secret: Code = "BYGY".parse().unwrap();
///
/// // Y at position 1 is exact; one more Y and one B appear elsewhere
/// assert_eq!(score(&guess, &secret).unwrap(), Feedback::new(1, 2));
/// ```
pub fn score(attempt: &Code, reference: &Code) -> Result<Feedback, SolverError> {
    if attempt.length() != reference.length() {
        return Err(SolverError::ShapeMismatch {
            left: attempt.length().get(),
            right: reference.length().get(),
        });
    }
    Ok(score_pegs(attempt.pegs(), reference.pegs()))
}

/// Allocation-free scoring of two equal-length peg slices
///
/// This is the inner loop of every strategy, so the shape check lives in
/// [`score`] and is only asserted here.
#[must_use]
pub(crate) fn score_pegs(attempt: &[Color], reference: &[Color]) -> Feedback {
    debug_assert_eq!(attempt.len(), reference.len());

    let mut used = [false; MAX_LENGTH];
    let mut exact = 0u8;

    // First pass: exact matches
    for (i, (a, r)) in attempt.iter().zip(reference).enumerate() {
        if a == r {
            exact += 1;
            used[i] = true;
        }
    }

    // Second pass: color-only matches against unused reference pegs
    let mut color_only = 0u8;
    for (i, a) in attempt.iter().enumerate() {
        if *a == reference[i] {
            continue;
        }
        if let Some(j) = (0..reference.len()).find(|&j| j != i && !used[j] && reference[j] == *a) {
            used[j] = true;
            color_only += 1;
        }
    }

    Feedback::new(exact, color_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enumerate;

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    fn length(pegs: usize) -> CodeLength {
        CodeLength::new(pegs).unwrap()
    }

    #[test]
    fn identical_codes_are_solved() {
        for len in CodeLength::ALL {
            for c in enumerate(len).step_by(7) {
                let fb = score(&c, &c).unwrap();
                assert_eq!(fb, Feedback::solved(len));
                assert!(fb.is_solved(len));
            }
        }
    }

    #[test]
    fn no_shared_colors() {
        assert_eq!(score(&code("YYBB"), &code("GGRR")).unwrap(), Feedback::new(0, 0));
    }

    #[test]
    fn all_color_only() {
        assert_eq!(score(&code("YBGR"), &code("RGBY")).unwrap(), Feedback::new(0, 4));
    }

    #[test]
    fn exact_match_consumes_reference_peg() {
        // The B at position 0 is exact, so the second B in the guess finds
        // no unused B in the reference.
        assert_eq!(score(&code("BB"), &code("BG")).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn duplicate_colors_count_once() {
        // Guess has three Y, secret has one Y (not in an exact position)
        assert_eq!(score(&code("YYYB"), &code("BGRY")).unwrap(), Feedback::new(0, 2));
        assert_eq!(score(&code("YYYY"), &code("YBBB")).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn shape_mismatch_rejected() {
        assert_eq!(
            score(&code("YB"), &code("YBG")),
            Err(SolverError::ShapeMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn bounded_and_symmetric_exhaustive() {
        let len = length(3);
        for a in enumerate(len) {
            for b in enumerate(len) {
                let ab = score(&a, &b).unwrap();
                let ba = score(&b, &a).unwrap();
                assert!(usize::from(ab.exact() + ab.color_only()) <= 3);
                assert_eq!(ab, ba, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn matches_color_count_formula() {
        // exact + color_only == Σ_color min(count_a, count_b)
        let len = length(4);
        for a in enumerate(len).step_by(5) {
            for b in enumerate(len).step_by(11) {
                let fb = score(&a, &b).unwrap();
                let common: usize = Color::ALL
                    .into_iter()
                    .map(|color| {
                        let in_a = a.pegs().iter().filter(|&&p| p == color).count();
                        let in_b = b.pegs().iter().filter(|&&p| p == color).count();
                        in_a.min(in_b)
                    })
                    .sum();
                assert_eq!(usize::from(fb.exact() + fb.color_only()), common);
            }
        }
    }

    #[test]
    fn feedback_validation() {
        let len = length(4);
        assert!(Feedback::checked(2, 2, len).is_ok());
        assert_eq!(
            Feedback::checked(3, 2, len),
            Err(SolverError::InvalidFeedback {
                exact: 3,
                color_only: 2,
                length: 4
            })
        );
    }

    #[test]
    fn all_feedbacks_are_valid_and_distinct() {
        let len = length(4);
        let all: Vec<Feedback> = Feedback::all(len).collect();
        // (N+1)(N+2)/2 combinations
        assert_eq!(all.len(), 15);
        for fb in &all {
            assert!(fb.validate(len).is_ok());
            assert!(fb.bucket() < Feedback::BUCKETS);
        }
        let mut buckets: Vec<usize> = all.iter().map(|fb| fb.bucket()).collect();
        buckets.dedup();
        assert_eq!(buckets.len(), all.len());
    }

    #[test]
    fn parse_feedback() {
        assert_eq!("1 2".parse::<Feedback>().unwrap(), Feedback::new(1, 2));
        assert_eq!(" 0,3 ".parse::<Feedback>().unwrap(), Feedback::new(0, 3));
        assert_eq!("4/0".parse::<Feedback>().unwrap(), Feedback::new(4, 0));
        assert!("1".parse::<Feedback>().is_err());
        assert!("1 2 3".parse::<Feedback>().is_err());
        assert!("a b".parse::<Feedback>().is_err());
        assert!("-1 2".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_feedback() {
        assert_eq!(Feedback::new(2, 1).to_string(), "(2, 1)");
    }
}
