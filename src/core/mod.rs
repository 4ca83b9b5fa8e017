//! Core domain types for Mastermind
//!
//! Pure, I/O-free building blocks: colours, code generation, guess parsing
//! and feedback scoring.

mod color;
mod feedback;
mod generator;
mod guess;

pub use color::{CODE_LENGTH, Code, Color, Guess};
pub use feedback::{Feedback, Pin, evaluate};
pub use generator::{generate, generate_with};
pub use guess::{INPUT_WIDTH, ValidationError, parse};
