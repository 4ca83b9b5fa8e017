//! Interactive TUI for playing Mastermind
//!
//! Full-screen terminal interface built with ratatui.

mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
