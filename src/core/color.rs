//! Peg colours and the fixed-length sequences built from them
//!
//! Both the hidden code and every guess are exactly [`CODE_LENGTH`] colours
//! drawn from the five-colour alphabet. Repetition is allowed.

use std::fmt;

/// Number of pegs in a code or a guess
pub const CODE_LENGTH: usize = 3;

/// A peg colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    White,
    Yellow,
    Green,
}

impl Color {
    /// The full alphabet, in the order it is presented to the player
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Blue,
        Self::White,
        Self::Yellow,
        Self::Green,
    ];

    /// Map a single letter to a colour, ignoring case
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_letter('g'), Some(Color::Green));
    /// assert_eq!(Color::from_letter('W'), Some(Color::White));
    /// assert_eq!(Color::from_letter('x'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'b' => Some(Self::Blue),
            'w' => Some(Self::White),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            _ => None,
        }
    }

    /// Upper-case letter used for input and display
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::White => "White",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Write pegs as space-separated letters, e.g. `R B G`
fn write_pegs(f: &mut fmt::Formatter<'_>, pegs: &[Color; CODE_LENGTH]) -> fmt::Result {
    for (i, color) in pegs.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{color}")?;
    }
    Ok(())
}

/// The hidden sequence chosen by the codemaker
///
/// Fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pegs(f, &self.0)
    }
}

/// One sequence submitted by the codebreaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([Color; CODE_LENGTH]);

impl Guess {
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pegs(f, &self.0)
    }
}

impl From<Code> for Guess {
    fn from(code: Code) -> Self {
        Self(code.0)
    }
}
