//! Display functions for rules, game progress and scores

use super::formatters::{format_code, format_feedback, format_guess};
use crate::core::Code;
use crate::game::{Attempt, MAX_ATTEMPTS, Outcome};
use crate::score::ScoreRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Rules of the game, as shown from the menu
pub const RULES: &str = "\
Mastermind is a code-breaking game between two players: the codemaker
(in this case the computer) and the codebreaker (you).

  1. The codemaker picks a secret pattern of three pegs, each one of
     Red (R), Blue (B), White (W), Yellow (Y) or Green (G).
     Colours may repeat.

  2. You have ten attempts to guess the pattern. Enter a guess as three
     letters separated by single spaces, for example: R B G

     After each guess you receive three pins:
       R  a colour is in the code and in the correct position
       W  a colour is in the code but in the wrong position
       O  the colour has no match left in the code

     Pins are listed R first, then W, then O. They do not tell you
     which peg earned which pin.

  3. Guess the pattern within ten attempts and you win! Your score is the
     number of attempts you needed; the lowest score is kept as the high
     score.";

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(64).cyan())
}

/// Print the rules
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_rules(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "{:^64}", "Mastermind Rules".bright_cyan().bold())?;
    rule(out)?;
    writeln!(out, "{RULES}")?;
    rule(out)
}

/// Print the stored high score, or an invitation to set one
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_high_score(out: &mut impl Write, record: Option<&ScoreRecord>) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "{:^64}", "High Score".bright_cyan().bold())?;
    match record {
        Some(record) => writeln!(
            out,
            "\nThe high score set by {} is {}",
            record.name.bright_yellow().bold(),
            record.attempts.to_string().bright_cyan().bold()
        )?,
        None => {
            writeln!(out, "\nA high score has not been set yet!")?;
            writeln!(out, "Be the first to set one!")?;
        }
    }
    rule(out)
}

/// Print one resolved attempt: number, guess and pins
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_attempt(out: &mut impl Write, attempt: &Attempt) -> io::Result<()> {
    writeln!(
        out,
        "  {:>2}/{MAX_ATTEMPTS}  {}   Pins: {}",
        attempt.index,
        format_guess(&attempt.guess),
        format_feedback(attempt.feedback)
    )
}

/// Reveal the code and announce the result
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_outcome(
    out: &mut impl Write,
    outcome: Outcome,
    code: &Code,
    score: Option<usize>,
) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "Code: {}", format_code(code))?;

    match (outcome, score) {
        (Outcome::Won, Some(score)) => {
            writeln!(out, "\n{}", "Congratulations! You win!".bright_green().bold())?;
            writeln!(out, "Score: {score}")?;
        }
        (Outcome::Lost, _) => {
            writeln!(out, "\n{}", "You lost!".red().bold())?;
        }
        _ => {
            writeln!(out, "\nGame abandoned.")?;
        }
    }
    rule(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color::*, Feedback, Guess};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rules_mention_all_pins_and_limit() {
        let text = render(|out| print_rules(out));
        assert!(text.contains("Mastermind Rules"));
        assert!(text.contains("ten attempts"));
        for symbol in ["R  a colour", "W  a colour", "O  the colour"] {
            assert!(text.contains(symbol), "{symbol}");
        }
    }

    #[test]
    fn high_score_present() {
        let record = ScoreRecord::new("Ann", 4);
        let text = render(|out| print_high_score(out, Some(&record)));
        assert!(text.contains("The high score set by Ann is 4"));
    }

    #[test]
    fn high_score_absent() {
        let text = render(|out| print_high_score(out, None));
        assert!(text.contains("has not been set yet"));
    }

    #[test]
    fn attempt_line() {
        let attempt = Attempt {
            index: 3,
            guess: Guess::new([Red, Blue, Green]),
            feedback: Feedback::from_counts(2, 0).unwrap(),
        };
        let text = render(|out| print_attempt(out, &attempt));
        assert_eq!(text, "   3/10  R B G   Pins: R R O\n");
    }

    #[test]
    fn outcome_won_shows_code_and_score() {
        let code = Code::new([Red, Blue, Green]);
        let text = render(|out| print_outcome(out, Outcome::Won, &code, Some(2)));
        assert!(text.contains("Code: R B G"));
        assert!(text.contains("You win!"));
        assert!(text.contains("Score: 2"));
    }

    #[test]
    fn outcome_lost() {
        let code = Code::new([Yellow, Yellow, White]);
        let text = render(|out| print_outcome(out, Outcome::Lost, &code, None));
        assert!(text.contains("Code: Y Y W"));
        assert!(text.contains("You lost!"));
    }

    #[test]
    fn outcome_abandoned() {
        let code = Code::new([Yellow, Yellow, White]);
        let text = render(|out| print_outcome(out, Outcome::Unresolved, &code, None));
        assert!(text.contains("abandoned"));
    }
}
