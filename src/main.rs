//! Mastermind - CLI
//!
//! Crack a hidden three-colour code in ten attempts, in a full-screen TUI or
//! a plain text menu.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_menu, show_high_score},
    interactive::{App, run_tui},
    logging::{self, LogOutput},
    output::print_rules,
    score::{DEFAULT_SCORE_FILE, FileScoreStore},
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a three-colour code in ten attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File holding the high score (name on line 1, attempts on line 2)
    #[arg(long, global = true, env = "MASTERMIND_SCORE_FILE", default_value = DEFAULT_SCORE_FILE)]
    score_file: PathBuf,

    /// Seed for code generation, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text menu (rules, play, high score, quit)
    Simple,

    /// Print the rules
    Rules,

    /// Print the current high score
    Score,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(
        cli.verbose,
        LogOutput::for_mode(matches!(command, Commands::Play)),
    );

    let mut store = FileScoreStore::new(&cli.score_file);
    debug!(path = %store.path().display(), "using score file");

    match command {
        Commands::Play => {
            let app = App::new(Box::new(store), make_rng(cli.seed));
            run_tui(app).context("terminal UI failed")
        }
        Commands::Simple => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            run_menu(&mut input, &mut out, &mut store, &mut make_rng(cli.seed))
        }
        Commands::Rules => {
            print_rules(&mut io::stdout().lock())?;
            Ok(())
        }
        Commands::Score => show_high_score(&mut io::stdout().lock(), &store),
    }
}
