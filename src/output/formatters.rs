//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback, Guess, Pin};
use colored::{ColoredString, Colorize};

/// A colour letter painted in its own colour
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    let letter = color.letter().to_string();
    match color {
        Color::Red => letter.red().bold(),
        Color::Blue => letter.blue().bold(),
        Color::White => letter.white().bold(),
        Color::Yellow => letter.yellow().bold(),
        Color::Green => letter.green().bold(),
    }
}

/// A pin symbol, red for exact and white for partial
#[must_use]
pub fn paint_pin(pin: Pin) -> ColoredString {
    let symbol = pin.symbol().to_string();
    match pin {
        Pin::Exact => symbol.bright_red().bold(),
        Pin::Partial => symbol.bright_white().bold(),
        Pin::None => symbol.bright_black(),
    }
}

fn join(parts: impl Iterator<Item = ColoredString>) -> String {
    parts
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_guess(guess: &Guess) -> String {
    join(guess.pegs().iter().map(|&c| paint_color(c)))
}

#[must_use]
pub fn format_code(code: &Code) -> String {
    join(code.pegs().iter().map(|&c| paint_color(c)))
}

#[must_use]
pub fn format_feedback(feedback: Feedback) -> String {
    join(feedback.pins().iter().map(|&p| paint_pin(p)))
}

/// The legend shown at the start of a game, e.g. `Red (R), Blue (B), ...`
#[must_use]
pub fn color_legend() -> String {
    Color::ALL
        .iter()
        .map(|&c| format!("{} ({})", c.name(), paint_color(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn feedback_plain_symbols() {
        plain();
        let feedback = Feedback::from_counts(1, 1).unwrap();
        assert_eq!(format_feedback(feedback), "R W O");
    }

    #[test]
    fn guess_and_code_plain_letters() {
        plain();
        assert_eq!(format_guess(&Guess::new([Red, White, Yellow])), "R W Y");
        assert_eq!(format_code(&Code::new([Green, Green, Blue])), "G G B");
    }

    #[test]
    fn legend_lists_every_color() {
        plain();
        assert_eq!(
            color_legend(),
            "Red (R), Blue (B), White (W), Yellow (Y), Green (G)"
        );
    }
}
