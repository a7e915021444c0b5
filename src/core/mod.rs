//! Core domain types for Mastermind
//!
//! This module contains the pure value types the solver reasons about:
//! colors, codes, the codespace codec and the feedback scorer. Nothing here
//! holds state between calls.

mod code;
mod codec;
mod color;
mod feedback;

pub use code::{Code, CodeLength, MAX_LENGTH, MIN_LENGTH};
pub use codec::{CodeIndex, Codes, decode, encode, enumerate};
pub use color::Color;
pub use feedback::{Feedback, score};

pub(crate) use feedback::score_pegs;
