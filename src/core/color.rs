//! Peg colors
//!
//! The six colors are enumerated in a fixed order. That order is the digit
//! value each color contributes to a [`CodeIndex`](super::CodeIndex).

use crate::error::SolverError;
use std::fmt;

/// One of the six peg colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Yellow,
    Blue,
    Green,
    Red,
    Pink,
    Orange,
}

impl Color {
    /// Number of colors in the alphabet
    pub const COUNT: usize = 6;

    /// All colors in digit order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Pink,
        Self::Orange,
    ];

    /// Radix digit of this color (0-5)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        self as usize
    }

    /// Color for a radix digit
    ///
    /// Returns `None` if `digit >= 6`.
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: usize) -> Option<Self> {
        if digit < Self::COUNT {
            Some(Self::ALL[digit])
        } else {
            None
        }
    }

    /// Single-letter name used for display and parsing
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Red => 'R',
            Self::Pink => 'P',
            Self::Orange => 'O',
        }
    }

    /// Parse a color from its letter (case-insensitive)
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidColor`] for any other character.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_letter('g').unwrap(), Color::Green);
    /// assert!(Color::from_letter('x').is_err());
    /// ```
    pub fn from_letter(letter: char) -> Result<Self, SolverError> {
        Self::ALL
            .into_iter()
            .find(|color| color.letter() == letter.to_ascii_uppercase())
            .ok_or(SolverError::InvalidColor(letter))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_follow_enumeration_order() {
        for (digit, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(color.digit(), digit);
            assert_eq!(Color::from_digit(digit), Some(color));
        }
        assert_eq!(Color::from_digit(6), None);
    }

    #[test]
    fn letters_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Ok(color));
            assert_eq!(
                Color::from_letter(color.letter().to_ascii_lowercase()),
                Ok(color)
            );
        }
    }

    #[test]
    fn unknown_letter_rejected() {
        assert_eq!(Color::from_letter('W'), Err(SolverError::InvalidColor('W')));
        assert_eq!(Color::from_letter('1'), Err(SolverError::InvalidColor('1')));
    }

    #[test]
    fn default_is_first_digit() {
        assert_eq!(Color::default(), Color::Yellow);
        assert_eq!(format!("{}", Color::Orange), "O");
    }
}
