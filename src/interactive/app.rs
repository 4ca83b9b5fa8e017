//! TUI application state and logic

use crate::core::INPUT_WIDTH;
use crate::game::{GameSession, Outcome, SubmitError};
use crate::score::{ScoreRecord, ScoreStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Longest name accepted for the high score table
const MAX_NAME_LEN: usize = 24;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub high_score: Option<ScoreRecord>,
    pub show_rules: bool,
    pub should_quit: bool,
    store: Box<dyn ScoreStore>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess
    Guess,
    /// Won with a record score, typing a name
    Name,
    /// Game finished, waiting for new game or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(store: Box<dyn ScoreStore>, mut rng: StdRng) -> Self {
        let session = GameSession::from_rng(&mut rng);
        let mut app = Self {
            session,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            high_score: None,
            show_rules: false,
            should_quit: false,
            store,
            rng,
        };
        app.refresh_high_score();
        app.add_message(
            "Enter a guess like 'R B G'. F1 toggles the rules, Esc gives up.",
            MessageStyle::Info,
        );
        app
    }

    fn refresh_high_score(&mut self) {
        match self.store.load() {
            Ok(record) => self.high_score = record,
            Err(err) => {
                warn!(error = %err, "failed to load high score");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let result = self.session.submit(&input).map(|attempt| {
            format!(
                "Attempt {}: {} -> {}",
                attempt.index, attempt.guess, attempt.feedback
            )
        });

        match result {
            Ok(text) => self.add_message(&text, MessageStyle::Info),
            Err(SubmitError::Invalid(err)) => {
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
            Err(SubmitError::GameOver) => return,
        }

        match self.session.outcome() {
            Outcome::Won => self.finish_won(),
            Outcome::Lost => {
                self.stats.games_played += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("You lost! The code was {}", self.session.code()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Unresolved => {}
        }
    }

    fn finish_won(&mut self) {
        self.stats.games_played += 1;
        self.stats.games_won += 1;

        let Some(score) = self.session.score() else {
            return;
        };
        self.add_message(
            &format!(
                "🎉 Cracked {} in {score} attempts! Score: {score}",
                self.session.code()
            ),
            MessageStyle::Success,
        );

        match self.store.qualifies(score) {
            Ok(true) => {
                self.input_mode = InputMode::Name;
                self.add_message(
                    "New high score! Type your name and press Enter.",
                    MessageStyle::Success,
                );
            }
            Ok(false) => {
                self.input_mode = InputMode::GameOver;
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => {
                warn!(error = %err, "failed to check high score");
                self.input_mode = InputMode::GameOver;
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Store the typed name with the winning score
    pub fn submit_name(&mut self) {
        let name = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::GameOver;

        if let Some(score) = self.session.score() {
            match self.store.save(&name, score) {
                Ok(true) => {
                    self.refresh_high_score();
                    self.add_message("High score saved!", MessageStyle::Success);
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "failed to save high score");
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the current game and reveal the code
    pub fn give_up(&mut self) {
        self.stats.games_played += 1;
        self.input_mode = InputMode::GameOver;
        self.input_buffer.clear();
        self.add_message(
            &format!("Game abandoned. The code was {}", self.session.code()),
            MessageStyle::Info,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::from_rng(&mut self.rng);
        self.input_mode = InputMode::Guess;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            "New game started! Enter a guess like 'R B G'.",
            MessageStyle::Info,
        );
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) {
            self.show_rules = !self.show_rules;
            return;
        }

        match self.input_mode {
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.give_up(),
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < INPUT_WIDTH {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Name => match key.code {
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_NAME_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_name(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
