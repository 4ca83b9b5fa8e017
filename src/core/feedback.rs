//! Feedback pins and scoring of a guess against the code
//!
//! Feedback is a group of three pins, not a per-position annotation:
//! every Exact pin comes first, then every Partial pin, then every None pin.
//! Keeping the kinds grouped hides which slot earned which pin.

use super::color::{CODE_LENGTH, Code, Guess};
use std::fmt;

/// A single feedback pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Right colour in the right position (red pin)
    Exact,
    /// Right colour in the wrong position (white pin)
    Partial,
    /// No unclaimed match for this colour
    None,
}

impl Pin {
    /// Symbol printed for this pin
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'R',
            Self::Partial => 'W',
            Self::None => 'O',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Self::Exact),
            'W' => Some(Self::Partial),
            'O' => Some(Self::None),
            _ => None,
        }
    }
}

/// The three pins returned for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Pin; CODE_LENGTH]);

impl Feedback {
    /// All pins exact: the guess equals the code
    pub const PERFECT: Self = Self([Pin::Exact; CODE_LENGTH]);

    /// Build feedback from pin counts, emitting them in canonical order
    ///
    /// Returns `None` if the counts exceed the code length.
    #[must_use]
    pub fn from_counts(exact: usize, partial: usize) -> Option<Self> {
        if exact + partial > CODE_LENGTH {
            return None;
        }
        let pins = std::array::from_fn(|i| {
            if i < exact {
                Pin::Exact
            } else if i < exact + partial {
                Pin::Partial
            } else {
                Pin::None
            }
        });
        Some(Self(pins))
    }

    /// Score `guess` against `code`
    ///
    /// Repeated colours on either side are credited at most once per
    /// unclaimed occurrence.
    ///
    /// # Algorithm
    /// 1. Exact pass: equal colours at the same position claim both slots
    /// 2. Partial pass: each unclaimed guess slot claims the first unclaimed
    ///    code slot of the same colour
    /// 3. Every guess slot still unclaimed yields a None pin
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color::*, Feedback, Guess, Pin};
    ///
    /// let code = Code::new([Red, Red, Blue]);
    ///
    /// let feedback = Feedback::evaluate(&Guess::new([Red, Yellow, Red]), &code);
    /// assert_eq!(feedback.pins(), &[Pin::Exact, Pin::Partial, Pin::None]);
    ///
    /// // the single B in the code is claimed by the exact match in slot 2
    /// let feedback = Feedback::evaluate(&Guess::new([Red, Blue, Blue]), &code);
    /// assert_eq!(feedback.pins(), &[Pin::Exact, Pin::Exact, Pin::None]);
    /// ```
    #[must_use]
    // Allow: indices address both sequences and both claim masks at once
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate(guess: &Guess, code: &Code) -> Self {
        let guess = guess.pegs();
        let code = code.pegs();

        let mut guess_claimed = [false; CODE_LENGTH];
        let mut code_claimed = [false; CODE_LENGTH];
        let mut pins = [Pin::None; CODE_LENGTH];
        let mut emitted = 0;

        // Exact pass
        for i in 0..CODE_LENGTH {
            if guess[i] == code[i] {
                pins[emitted] = Pin::Exact;
                emitted += 1;
                guess_claimed[i] = true;
                code_claimed[i] = true;
            }
        }

        // Partial pass
        for i in 0..CODE_LENGTH {
            if guess_claimed[i] {
                continue;
            }
            let hit = (0..CODE_LENGTH).find(|&j| !code_claimed[j] && code[j] == guess[i]);
            if let Some(j) = hit {
                pins[emitted] = Pin::Partial;
                emitted += 1;
                guess_claimed[i] = true;
                code_claimed[j] = true;
            }
        }

        // Remaining slots keep Pin::None
        Self(pins)
    }

    #[inline]
    #[must_use]
    pub const fn pins(&self) -> &[Pin; CODE_LENGTH] {
        &self.0
    }

    /// True when every pin is exact
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    #[must_use]
    pub fn count_exact(self) -> usize {
        self.count(Pin::Exact)
    }

    #[must_use]
    pub fn count_partial(self) -> usize {
        self.count(Pin::Partial)
    }

    fn count(self, kind: Pin) -> usize {
        self.0.iter().filter(|&&pin| pin == kind).count()
    }

    /// Parse feedback written as pin symbols, e.g. `"R W O"` or `"RWO"`
    ///
    /// Spaces are ignored. The pins must already be in canonical order.
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let pins: Vec<Pin> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Pin::from_symbol)
            .collect::<Option<_>>()?;

        let pins: [Pin; CODE_LENGTH] = pins.try_into().ok()?;
        let feedback = Self(pins);

        let canonical = Self::from_counts(feedback.count_exact(), feedback.count_partial())?;
        (canonical == feedback).then_some(feedback)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pin.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score a guess against the code
///
/// Free-function form of [`Feedback::evaluate`].
#[inline]
#[must_use]
pub fn evaluate(guess: &Guess, code: &Code) -> Feedback {
    Feedback::evaluate(guess, code)
}
