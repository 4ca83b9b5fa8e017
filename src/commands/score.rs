//! High score display and best-effort recording

use super::read_line;
use crate::output::print_high_score;
use crate::score::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::warn;

/// Show the stored high score
///
/// A store that cannot be read is reported on `out` and logged; it is not an
/// error for the caller.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn show_high_score(out: &mut impl Write, store: &dyn ScoreStore) -> Result<()> {
    match store.load() {
        Ok(record) => print_high_score(out, record.as_ref())?,
        Err(err) => {
            warn!(error = %err, "failed to load high score");
            writeln!(out, "\n{} {err}", "Warning:".yellow().bold())?;
        }
    }
    Ok(())
}

/// Offer to record a winning score
///
/// The player is asked for a name only if `attempts` would become the new
/// high score. Store failures are reported and logged, never propagated:
/// the game result has already been shown.
///
/// Returns `true` if a new high score was written.
///
/// # Errors
/// Returns an error only if the terminal cannot be read or written.
pub fn record_score(
    input: &mut impl BufRead,
    out: &mut impl Write,
    store: &mut dyn ScoreStore,
    attempts: usize,
) -> Result<bool> {
    match store.qualifies(attempts) {
        Ok(true) => {}
        Ok(false) => return Ok(false),
        Err(err) => {
            warn!(error = %err, "failed to check high score");
            writeln!(out, "{} {err}", "Warning:".yellow().bold())?;
            return Ok(false);
        }
    }

    writeln!(out, "{}", "New high score!".bright_yellow().bold())?;
    let name = read_line(input, out, "Name: ")?.unwrap_or_default();

    match store.save(&name, attempts) {
        Ok(saved) => Ok(saved),
        Err(err) => {
            warn!(error = %err, "failed to save high score");
            writeln!(out, "{} {err}", "Warning:".yellow().bold())?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{FileScoreStore, MemoryScoreStore, ScoreRecord};
    use tempfile::TempDir;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn first_win_prompts_for_name_and_saves() {
        colored::control::set_override(false);
        let mut store = MemoryScoreStore::new();
        let mut input: &[u8] = b"Ann\n";
        let mut out = Vec::new();

        assert!(record_score(&mut input, &mut out, &mut store, 5).unwrap());
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Ann", 5)));
        assert!(text(out).contains("Name: "));
    }

    #[test]
    fn worse_score_does_not_prompt() {
        let mut store = MemoryScoreStore::with_record(ScoreRecord::new("Ann", 5));
        let mut input: &[u8] = b"Bob\n";
        let mut out = Vec::new();

        assert!(!record_score(&mut input, &mut out, &mut store, 7).unwrap());
        assert!(!text(out).contains("Name:"));
        assert_eq!(input, b"Bob\n");
        assert_eq!(store.load().unwrap().unwrap().name, "Ann");
    }

    #[test]
    fn broken_store_is_a_warning_not_an_error() {
        colored::control::set_override(false);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("highscore.txt");
        std::fs::write(&path, "garbage").unwrap();
        let mut store = FileScoreStore::new(path);

        let mut input: &[u8] = b"Ann\n";
        let mut out = Vec::new();
        assert!(!record_score(&mut input, &mut out, &mut store, 2).unwrap());
        assert!(text(out).contains("Warning:"));
    }

    #[test]
    fn unwritable_store_is_a_warning() {
        colored::control::set_override(false);
        let temp = TempDir::new().unwrap();
        let mut store = FileScoreStore::new(temp.path().join("nope").join("highscore.txt"));

        let mut input: &[u8] = b"Ann\n";
        let mut out = Vec::new();
        assert!(!record_score(&mut input, &mut out, &mut store, 2).unwrap());
        let out = text(out);
        assert!(out.contains("Name: "));
        assert!(out.contains("Warning:"));
    }

    #[test]
    fn show_high_score_reads_store() {
        colored::control::set_override(false);
        let store = MemoryScoreStore::with_record(ScoreRecord::new("Cid", 3));
        let mut out = Vec::new();
        show_high_score(&mut out, &store).unwrap();
        assert!(text(out).contains("The high score set by Cid is 3"));
    }
}
