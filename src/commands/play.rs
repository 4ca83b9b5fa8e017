//! One game in text mode

use super::{read_line, record_score};
use crate::game::{GameSession, MAX_ATTEMPTS, Outcome, SubmitError};
use crate::output::formatters::color_legend;
use crate::output::{print_attempt, print_outcome};
use crate::score::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Play `session` to completion against a line-based terminal
///
/// Typing `quit` (or reaching end of input) abandons the game. On a win the
/// score is shown first and then offered to `store`.
///
/// Returns the final outcome; `Outcome::Unresolved` means abandoned.
///
/// # Errors
/// Returns an error only if the terminal cannot be read or written.
pub fn play_game(
    input: &mut impl BufRead,
    out: &mut impl Write,
    mut session: GameSession,
    store: &mut dyn ScoreStore,
) -> Result<Outcome> {
    writeln!(out, "{}", "─".repeat(64).cyan())?;
    writeln!(out, "Colors: {}", color_legend())?;
    writeln!(
        out,
        "Crack the code in {MAX_ATTEMPTS} attempts. Type 'quit' to give up."
    )?;

    while !session.is_over() {
        let prompt = format!("\nAttempt {}: ", session.next_index());
        let Some(line) = read_line(input, out, &prompt)? else {
            debug!("input closed mid-game");
            break;
        };
        if line.trim().eq_ignore_ascii_case("quit") {
            debug!("game abandoned");
            break;
        }

        match session.submit(&line) {
            Ok(attempt) => print_attempt(out, attempt)?,
            Err(SubmitError::Invalid(err)) => {
                writeln!(out, "{} {err}", "Error ...".red().bold())?;
            }
            Err(SubmitError::GameOver) => break,
        }
    }

    let outcome = session.outcome();
    print_outcome(out, outcome, session.code(), session.score())?;

    if let Some(score) = session.score() {
        record_score(input, out, store, score)?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color::*};
    use crate::score::{MemoryScoreStore, ScoreRecord};

    fn session() -> GameSession {
        GameSession::with_code(Code::new([Red, Blue, Green]))
    }

    fn run(script: &str, store: &mut MemoryScoreStore) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let outcome = play_game(&mut input, &mut out, session(), store).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_invalid_input() {
        let mut store = MemoryScoreStore::new();
        let (outcome, out) = run("y y y\nR  B G\nr b x\nr b g\nAnn\n", &mut store);

        assert_eq!(outcome, Outcome::Won);
        assert!(out.contains("Pins: O O O"));
        assert!(out.contains("Error ... Invalid input"));
        // invalid lines re-prompt the same attempt number
        assert_eq!(out.matches("Attempt 2: ").count(), 3);
        assert!(out.contains("Pins: R R R"));
        assert!(out.contains("Code: R B G"));
        assert!(out.contains("Score: 2"));
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Ann", 2)));
    }

    #[test]
    fn score_shown_before_name_prompt() {
        let mut store = MemoryScoreStore::new();
        let (_, out) = run("r b g\nAnn\n", &mut store);

        let score_at = out.find("Score: 1").unwrap();
        let name_at = out.find("Name: ").unwrap();
        assert!(score_at < name_at);
    }

    #[test]
    fn ten_misses_lose() {
        let mut store = MemoryScoreStore::new();
        let script = "w w w\n".repeat(MAX_ATTEMPTS) + "r b g\n";
        let (outcome, out) = run(&script, &mut store);

        assert_eq!(outcome, Outcome::Lost);
        assert!(out.contains("You lost!"));
        assert!(!out.contains("Attempt 11"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn quit_abandons_without_score() {
        let mut store = MemoryScoreStore::new();
        let (outcome, out) = run("g r b\nquit\n", &mut store);

        assert_eq!(outcome, Outcome::Unresolved);
        assert!(out.contains("Pins: W W W"));
        assert!(out.contains("abandoned"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn end_of_input_abandons() {
        let mut store = MemoryScoreStore::new();
        let (outcome, _) = run("y y y\n", &mut store);
        assert_eq!(outcome, Outcome::Unresolved);
    }

    #[test]
    fn non_record_win_keeps_existing() {
        let mut store = MemoryScoreStore::with_record(ScoreRecord::new("Eve", 1));
        let (outcome, out) = run("y y y\nr b g\n", &mut store);

        assert_eq!(outcome, Outcome::Won);
        assert!(!out.contains("Name:"));
        assert_eq!(store.load().unwrap().unwrap().name, "Eve");
    }
}
