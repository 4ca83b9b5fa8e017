//! Mastermind
//!
//! A terminal code-breaking game: the computer hides a sequence of three
//! coloured pegs and the player has ten attempts to find it, guided by
//! exact / partial / no-match pins after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Color::*};
//! use mastermind::game::{GameSession, Outcome};
//!
//! let mut game = GameSession::with_code(Code::new([Red, Blue, Green]));
//!
//! let attempt = game.submit("g r b").unwrap();
//! println!("Pins: {}", attempt.feedback); // W W W
//!
//! game.submit("r b g").unwrap();
//! assert_eq!(game.outcome(), Outcome::Won);
//! assert_eq!(game.score(), Some(2));
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// High score persistence
pub mod score;

// Command implementations
pub mod commands;

// Log filter and destination
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
