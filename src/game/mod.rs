//! Game session state machine

mod session;

pub use session::{Attempt, GameSession, MAX_ATTEMPTS, Outcome, SubmitError};
