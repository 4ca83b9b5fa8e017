//! A single game: the hidden code, the attempt log and the outcome
//!
//! The session starts `Unresolved` and moves to `Won` or `Lost` exactly once.
//! Both terminal states refuse further guesses.

use crate::core::{Code, Feedback, Guess, ValidationError, generate, generate_with, parse};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Number of guesses allowed before the game is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Terminal status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unresolved,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// One resolved guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// 1-based attempt number
    pub index: usize,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Error type for rejected submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Input did not parse; no attempt was consumed
    Invalid(ValidationError),
    /// The game is already won or lost
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::GameOver => write!(f, "The game is over, no more guesses are accepted"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::GameOver => None,
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    code: Code,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a game with a freshly generated code
    #[must_use]
    pub fn new() -> Self {
        Self::with_code(generate())
    }

    /// Start a game with a code drawn from `rng`
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_code(generate_with(rng))
    }

    /// Start a game with a known code
    #[must_use]
    pub fn with_code(code: Code) -> Self {
        debug!("new game session");
        Self {
            code,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: Outcome::Unresolved,
        }
    }

    /// Parse raw input and submit it as the next guess
    ///
    /// # Errors
    /// - `SubmitError::GameOver` once the game is won or lost
    /// - `SubmitError::Invalid` if the input does not parse; the session is
    ///   left untouched and the caller should prompt again
    pub fn submit(&mut self, raw: &str) -> Result<&Attempt, SubmitError> {
        if self.outcome.is_over() {
            return Err(SubmitError::GameOver);
        }
        let guess = parse(raw)?;
        self.submit_guess(guess)
    }

    /// Submit an already-validated guess
    ///
    /// # Errors
    /// Returns `SubmitError::GameOver` once the game is won or lost.
    pub fn submit_guess(&mut self, guess: Guess) -> Result<&Attempt, SubmitError> {
        if self.outcome.is_over() {
            return Err(SubmitError::GameOver);
        }

        let index = self.attempts.len() + 1;
        let feedback = Feedback::evaluate(&guess, &self.code);
        debug!(index, %guess, %feedback, "attempt resolved");

        if feedback.is_perfect() {
            self.outcome = Outcome::Won;
            info!(attempts = index, "code broken");
        } else if index == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
            info!("attempts exhausted");
        }

        self.attempts.push(Attempt {
            index,
            guess,
            feedback,
        });

        Ok(&self.attempts[index - 1])
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Number of the attempt the player is about to make
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.attempts.len() + 1
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// The player's score: the winning attempt number
    ///
    /// `None` unless the game was won.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Won => self.attempts.last().map(|a| a.index),
            _ => None,
        }
    }

    /// The hidden code
    ///
    /// Front ends reveal this only once the game is over.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }
}
