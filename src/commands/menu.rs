//! Simple text menu: rules, play, high score, quit

use super::{play_game, read_line, show_high_score};
use crate::game::GameSession;
use crate::output::print_rules;
use crate::score::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Rules,
    Play,
    HighScore,
    Quit,
}

impl MenuOption {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Rules),
            "2" => Some(Self::Play),
            "3" => Some(Self::HighScore),
            "4" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\nPlease select an option:")?;
    writeln!(out, "\t1. See Rules")?;
    writeln!(out, "\t2. Play Game")?;
    writeln!(out, "\t3. See Highest Score")?;
    writeln!(out, "\t4. Quit")
}

/// Run the menu loop until the player quits or input ends
///
/// Each game draws its code from `rng`.
///
/// # Errors
/// Returns an error only if the terminal cannot be read or written.
pub fn run_menu<R: Rng + ?Sized>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    store: &mut dyn ScoreStore,
    rng: &mut R,
) -> Result<()> {
    writeln!(out, "{}", "Welcome to Mastermind".bright_cyan().bold())?;

    loop {
        print_menu(out)?;
        let Some(line) = read_line(input, out, "Option: ")? else {
            break;
        };

        match MenuOption::parse(&line) {
            Some(MenuOption::Rules) => print_rules(out)?,
            Some(MenuOption::Play) => {
                let outcome = play_game(input, out, GameSession::from_rng(rng), store)?;
                debug!(?outcome, "game finished");
            }
            Some(MenuOption::HighScore) => show_high_score(out, store)?,
            Some(MenuOption::Quit) => break,
            None => writeln!(
                out,
                "\n{} Invalid option. Please try again",
                "Error ...".red().bold()
            )?,
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}
