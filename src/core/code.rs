//! Mastermind code representation
//!
//! A [`Code`] is a fixed-size sequence of 2 to 5 colored pegs. It is a small
//! `Copy` value so the solving loops never allocate while handling codes.

use super::Color;
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Shortest supported code
pub const MIN_LENGTH: usize = 2;

/// Longest supported code
pub const MAX_LENGTH: usize = 5;

/// Number of pegs in a code, validated to lie in `2..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeLength(u8);

impl CodeLength {
    /// Every supported length, shortest first
    pub const ALL: [Self; 4] = [Self(2), Self(3), Self(4), Self(5)];

    /// Create a validated code length
    ///
    /// # Errors
    /// Returns [`SolverError::UnsupportedLength`] unless `2 <= pegs <= 5`.
    pub fn new(pegs: usize) -> Result<Self, SolverError> {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&pegs) {
            Ok(Self(pegs as u8))
        } else {
            Err(SolverError::UnsupportedLength(pegs))
        }
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Size of the codespace, `6^N`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::CodeLength;
    ///
    /// assert_eq!(CodeLength::new(4).unwrap().space_size(), 1296);
    /// ```
    #[inline]
    #[must_use]
    pub const fn space_size(self) -> usize {
        Color::COUNT.pow(self.0 as u32)
    }
}

impl TryFrom<usize> for CodeLength {
    type Error = SolverError;

    fn try_from(pegs: usize) -> Result<Self, Self::Error> {
        Self::new(pegs)
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sequence of colored pegs
///
/// Pegs past `length` are always [`Color::Yellow`], so the derived equality
/// and hashing only ever distinguish the live pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: [Color; MAX_LENGTH],
    length: CodeLength,
}

impl Code {
    /// Create a code from a slice of colors
    ///
    /// # Errors
    /// Returns [`SolverError::UnsupportedLength`] if the slice holds fewer
    /// than 2 or more than 5 colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Color};
    ///
    /// let code = Code::new(&[Color::Blue, Color::Green]).unwrap();
    /// assert_eq!(code.to_string(), "B G");
    /// assert!(Code::new(&[Color::Blue]).is_err());
    /// ```
    pub fn new(colors: &[Color]) -> Result<Self, SolverError> {
        let length = CodeLength::new(colors.len())?;
        let mut pegs = [Color::Yellow; MAX_LENGTH];
        pegs[..colors.len()].copy_from_slice(colors);
        Ok(Self { pegs, length })
    }

    /// Code made of a single repeated color
    #[must_use]
    pub const fn filled(length: CodeLength, color: Color) -> Self {
        let mut pegs = [Color::Yellow; MAX_LENGTH];
        let mut i = 0;
        while i < length.get() {
            pegs[i] = color;
            i += 1;
        }
        Self { pegs, length }
    }

    /// The first code in enumeration order (all yellow, index 0)
    #[must_use]
    pub const fn first(length: CodeLength) -> Self {
        Self::filled(length, Color::Yellow)
    }

    /// Assemble a code from a raw peg buffer
    ///
    /// Callers must leave pegs past `length` as yellow.
    pub(crate) const fn from_pegs(pegs: [Color; MAX_LENGTH], length: CodeLength) -> Self {
        Self { pegs, length }
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub const fn length(&self) -> CodeLength {
        self.length
    }

    /// The live pegs
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs[..self.length.get()]
    }

    /// Color at a position
    ///
    /// # Panics
    /// Panics if `position >= length`.
    #[inline]
    #[must_use]
    pub fn peg(&self, position: usize) -> Color {
        self.pegs()[position]
    }

    /// Advance to the next code in enumeration order
    ///
    /// Works like an odometer: peg 0 moves to the next color and carries into
    /// peg 1 when it wraps, and so on. Returns `true` when the whole code
    /// wrapped back to all yellow.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, CodeLength};
    ///
    /// let mut code: Code = "OY".parse().unwrap();
    /// assert!(!code.increment());
    /// assert_eq!(code.to_string(), "Y B");
    ///
    /// let mut last: Code = "OO".parse().unwrap();
    /// assert!(last.increment());
    /// assert_eq!(last, Code::first(CodeLength::new(2).unwrap()));
    /// ```
    pub fn increment(&mut self) -> bool {
        let length = self.length.get();
        for peg in &mut self.pegs[..length] {
            let next = (peg.digit() + 1) % Color::COUNT;
            *peg = Color::ALL[next];
            if next != 0 {
                return false;
            }
        }
        true
    }

    /// Whether the code uses the given color anywhere
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.pegs().contains(&color)
    }
}

impl FromStr for Code {
    type Err = SolverError;

    /// Parse a code from color letters
    ///
    /// Letters may be separated by whitespace, commas or dashes:
    /// `"YBGR"`, `"y b g r"` and `"Y,B,G,R"` are the same code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pegs = [Color::Yellow; MAX_LENGTH];
        let mut count = 0;

        for letter in s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
        {
            let color = Color::from_letter(letter)?;
            if count < MAX_LENGTH {
                pegs[count] = color;
            }
            count += 1;
        }

        let length = CodeLength::new(count)?;
        Ok(Self { pegs, length })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(pegs: usize) -> CodeLength {
        CodeLength::new(pegs).unwrap()
    }

    #[test]
    fn length_bounds() {
        assert!(CodeLength::new(1).is_err());
        assert!(CodeLength::new(6).is_err());
        assert_eq!(CodeLength::new(0), Err(SolverError::UnsupportedLength(0)));
        for pegs in 2..=5 {
            assert_eq!(length(pegs).get(), pegs);
        }
    }

    #[test]
    fn space_sizes() {
        assert_eq!(length(2).space_size(), 36);
        assert_eq!(length(3).space_size(), 216);
        assert_eq!(length(4).space_size(), 1296);
        assert_eq!(length(5).space_size(), 7776);
    }

    #[test]
    fn parse_accepts_separators_and_case() {
        let a: Code = "YBGR".parse().unwrap();
        let b: Code = "y b g r".parse().unwrap();
        let c: Code = "Y,B,G,R".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(
            a.pegs(),
            &[Color::Yellow, Color::Blue, Color::Green, Color::Red]
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "YBX".parse::<Code>(),
            Err(SolverError::InvalidColor('X'))
        );
        assert_eq!("Y".parse::<Code>(), Err(SolverError::UnsupportedLength(1)));
        assert_eq!(
            "YBGRPO".parse::<Code>(),
            Err(SolverError::UnsupportedLength(6))
        );
    }

    #[test]
    fn codes_of_different_lengths_differ() {
        let short: Code = "YY".parse().unwrap();
        let long: Code = "YYY".parse().unwrap();
        assert_ne!(short, long);
    }

    #[test]
    fn increment_carries() {
        let mut code: Code = "OOY".parse().unwrap();
        assert!(!code.increment());
        assert_eq!(code.to_string(), "Y Y B");
    }

    #[test]
    fn increment_wraps_every_length() {
        for len in CodeLength::ALL {
            let mut code = Code::filled(len, Color::Orange);
            assert!(code.increment());
            assert_eq!(code, Code::first(len));
        }
    }

    #[test]
    fn display_and_contains() {
        let code: Code = "PGO".parse().unwrap();
        assert_eq!(format!("{code}"), "P G O");
        assert!(code.contains(Color::Green));
        assert!(!code.contains(Color::Yellow));
        assert_eq!(code.peg(2), Color::Orange);
    }
}
