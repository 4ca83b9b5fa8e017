//! High score persistence
//!
//! Only the single best (lowest) attempt count is ever kept.

mod store;

pub use store::{
    DEFAULT_SCORE_FILE, FileScoreStore, MemoryScoreStore, ScoreError, ScoreRecord, ScoreStore,
};
