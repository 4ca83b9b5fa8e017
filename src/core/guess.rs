//! Guess input parsing
//!
//! The accepted form is exactly three colour letters separated by single
//! spaces, e.g. `"R B G"` or `"r b g"`. Nothing else is trimmed or tolerated.

use super::color::{CODE_LENGTH, Color, Guess};
use std::fmt;
use std::str::FromStr;

/// Total width of a well-formed guess: three letters plus two separators
pub const INPUT_WIDTH: usize = CODE_LENGTH * 2 - 1;

/// Error type for rejected guess input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Wrong length, wrong separators, or a character outside the alphabet
    Malformed,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(
                f,
                "Invalid input: enter three of R, B, W, Y, G separated by single spaces (e.g. \"R B G\")"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse raw player input into a [`Guess`]
///
/// # Errors
/// Returns `ValidationError::Malformed` if:
/// - the input is not exactly 5 characters long
/// - either separator position is not a space
/// - any colour position is not one of r, b, w, y, g (any case)
///
/// # Examples
/// ```
/// use mastermind::core::{Color, parse};
///
/// let guess = parse("r b g").unwrap();
/// assert_eq!(guess.pegs(), &[Color::Red, Color::Blue, Color::Green]);
///
/// assert!(parse("R  B G").is_err());
/// assert!(parse("R B X").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Guess, ValidationError> {
    let chars: Vec<char> = raw.chars().collect();

    if chars.len() != INPUT_WIDTH {
        return Err(ValidationError::Malformed);
    }

    let mut pegs = [Color::Red; CODE_LENGTH];
    for (i, &ch) in chars.iter().enumerate() {
        if i % 2 == 1 {
            if ch != ' ' {
                return Err(ValidationError::Malformed);
            }
        } else {
            pegs[i / 2] = Color::from_letter(ch).ok_or(ValidationError::Malformed)?;
        }
    }

    Ok(Guess::new(pegs))
}

impl FromStr for Guess {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
