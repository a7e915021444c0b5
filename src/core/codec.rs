//! Codespace codec
//!
//! Maps every code of length N to a dense index in `[0, 6^N)` using a
//! little-endian base-6 encoding:
//!
//! ```text
//! index = Σ digit(code[i]) × 6^i
//! ```
//!
//! Peg 0 is the least significant digit, which makes index order identical to
//! the odometer order of [`Code::increment`].

use super::code::MAX_LENGTH;
use super::{Code, CodeLength, Color};
use crate::error::SolverError;
use std::fmt;
use std::iter::FusedIterator;

/// Dense index of a code within its codespace
///
/// The largest codespace (5 pegs) has 7776 codes, so the index fits in a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeIndex(u16);

impl CodeIndex {
    /// Raw index value
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl From<CodeIndex> for usize {
    fn from(index: CodeIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for CodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a code as its codespace index
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, encode};
///
/// let code: Code = "YYBB".parse().unwrap();
/// assert_eq!(encode(&code).get(), 252);
/// ```
#[must_use]
pub fn encode(code: &Code) -> CodeIndex {
    let index = code
        .pegs()
        .iter()
        .rev()
        .fold(0usize, |acc, peg| acc * Color::COUNT + peg.digit());
    CodeIndex(index as u16)
}

/// Decode an index back into the code it identifies
///
/// # Errors
/// Returns [`SolverError::InvalidIndex`] if `index >= 6^N`. Out-of-range
/// indices are never clamped.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeLength, decode};
///
/// let length = CodeLength::new(2).unwrap();
/// assert_eq!(decode(7, length).unwrap().to_string(), "B B");
/// assert!(decode(36, length).is_err());
/// ```
pub fn decode(index: usize, length: CodeLength) -> Result<Code, SolverError> {
    let size = length.space_size();
    if index >= size {
        return Err(SolverError::InvalidIndex { index, size });
    }

    let mut pegs = [Color::Yellow; MAX_LENGTH];
    let mut rest = index;
    for peg in pegs.iter_mut().take(length.get()) {
        *peg = Color::ALL[rest % Color::COUNT];
        rest /= Color::COUNT;
    }

    Ok(Code::from_pegs(pegs, length))
}

/// Iterate over every code of the given length in increasing index order
///
/// The iterator is lazy and finite; call `enumerate` again to restart.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeLength, encode, enumerate};
///
/// let length = CodeLength::new(3).unwrap();
/// assert_eq!(enumerate(length).len(), 216);
/// assert!(enumerate(length).enumerate().all(|(i, code)| encode(&code).get() == i));
/// ```
#[must_use]
pub fn enumerate(length: CodeLength) -> Codes {
    Codes {
        next: Some(Code::first(length)),
        remaining: length.space_size(),
    }
}

/// Iterator returned by [`enumerate`]
#[derive(Debug, Clone)]
pub struct Codes {
    next: Option<Code>,
    remaining: usize,
}

impl Iterator for Codes {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        let current = self.next?;
        let mut following = current;
        self.next = if following.increment() {
            None
        } else {
            Some(following)
        };
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Codes {}

impl FusedIterator for Codes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_bijection_all_lengths() {
        for length in CodeLength::ALL {
            for index in 0..length.space_size() {
                let code = decode(index, length).unwrap();
                assert_eq!(code.length(), length);
                assert_eq!(encode(&code).get(), index);
            }
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        let length = CodeLength::new(4).unwrap();
        assert_eq!(
            decode(1296, length),
            Err(SolverError::InvalidIndex {
                index: 1296,
                size: 1296
            })
        );
        assert!(decode(usize::MAX, length).is_err());
        assert!(decode(1295, length).is_ok());
    }

    #[test]
    fn enumeration_matches_index_order() {
        for length in CodeLength::ALL {
            let codes: Vec<Code> = enumerate(length).collect();
            assert_eq!(codes.len(), length.space_size());
            for (index, code) in codes.iter().enumerate() {
                assert_eq!(encode(code).get(), index);
                assert_eq!(decode(index, length).unwrap(), *code);
            }
        }
    }

    #[test]
    fn enumeration_is_odometer_not_lexicographic() {
        let length = CodeLength::new(2).unwrap();
        let first: Vec<String> = enumerate(length).take(8).map(|c| c.to_string()).collect();
        assert_eq!(
            first,
            ["Y Y", "B Y", "G Y", "R Y", "P Y", "O Y", "Y B", "B B"]
        );
    }

    #[test]
    fn enumeration_restarts_and_fuses() {
        let length = CodeLength::new(2).unwrap();
        let mut codes = enumerate(length);
        assert_eq!(codes.len(), 36);
        for _ in 0..36 {
            assert!(codes.next().is_some());
        }
        assert_eq!(codes.len(), 0);
        assert!(codes.next().is_none());
        assert!(codes.next().is_none());

        assert_eq!(enumerate(length).next(), Some(Code::first(length)));
    }

    #[test]
    fn known_indices() {
        let cases = [("YB", 6), ("YYB", 36), ("YYBB", 252), ("YYYBB", 1512), ("OOOOO", 7775)];
        for (text, index) in cases {
            let code: Code = text.parse().unwrap();
            assert_eq!(encode(&code).get(), index, "{text}");
        }
    }
}
