//! Terminal output formatting
//!
//! Display utilities for rules, feedback and scores.

pub mod display;
pub mod formatters;

pub use display::{RULES, print_attempt, print_high_score, print_outcome, print_rules};
