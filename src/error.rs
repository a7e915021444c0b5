//! Error type shared by the codec, scorer and solving engine

use thiserror::Error;

/// Errors raised by the solving core
///
/// Running out of candidates and an oracle abort are not errors: they are
/// reported as [`Outcome`](crate::solver::Outcome) variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two codes of different lengths were compared
    #[error("cannot compare codes of length {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// A code index outside `[0, 6^N)` was decoded
    #[error("code index {index} is outside a codespace of {size} codes")]
    InvalidIndex { index: usize, size: usize },

    /// Code lengths are limited to 2 through 5 pegs
    #[error("code length must be between 2 and 5, got {0}")]
    UnsupportedLength(usize),

    /// A character that does not name one of the six colors
    #[error("'{0}' is not a color (expected one of Y, B, G, R, P, O)")]
    InvalidColor(char),

    /// Feedback that cannot occur for codes of the given length
    #[error("feedback ({exact}, {color_only}) is impossible for {length} pegs")]
    InvalidFeedback {
        exact: u8,
        color_only: u8,
        length: usize,
    },

    /// Feedback text that could not be parsed
    #[error("cannot parse feedback '{0}' (expected two numbers, e.g. \"1 2\")")]
    ParseFeedback(String),
}
