//! Score store contract and its file and in-memory implementations
//!
//! The file format is two lines: the player name, then the attempt count.
//! A missing file means no high score has been set.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default location of the high score file, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "highscore.txt";

const ANONYMOUS: &str = "Anonymous";

/// The best result seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub attempts: usize,
}

impl ScoreRecord {
    /// Create a record, normalising the name so it fits on one line
    ///
    /// Surrounding whitespace is trimmed, line breaks become spaces and an
    /// empty name is replaced with `Anonymous`.
    #[must_use]
    pub fn new(name: &str, attempts: usize) -> Self {
        let name = name.trim().replace(['\r', '\n'], " ");
        let name = if name.is_empty() {
            ANONYMOUS.to_string()
        } else {
            name
        };
        Self { name, attempts }
    }

    /// Strictly lower attempt counts are better
    #[inline]
    #[must_use]
    pub const fn is_beaten_by(&self, attempts: usize) -> bool {
        attempts < self.attempts
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.name, self.attempts)
    }
}

/// Error type for score persistence
#[derive(Debug)]
pub enum ScoreError {
    Io(io::Error),
    /// The record exists but cannot be read back
    Corrupt(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "High score file could not be accessed: {err}"),
            Self::Corrupt(reason) => write!(f, "High score file is corrupt: {reason}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(_) => None,
        }
    }
}

impl From<io::Error> for ScoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Persistence for the single best score
pub trait ScoreStore {
    /// Read the current record, `None` if none has been set
    ///
    /// # Errors
    /// Returns `ScoreError` if the backing storage cannot be read.
    fn load(&self) -> Result<Option<ScoreRecord>, ScoreError>;

    /// Replace the stored record unconditionally
    ///
    /// # Errors
    /// Returns `ScoreError` if the backing storage cannot be written.
    fn replace(&mut self, record: &ScoreRecord) -> Result<(), ScoreError>;

    /// Whether `attempts` would become the new record
    ///
    /// # Errors
    /// Returns `ScoreError` if the current record cannot be read.
    fn qualifies(&self, attempts: usize) -> Result<bool, ScoreError> {
        Ok(self
            .load()?
            .is_none_or(|existing| existing.is_beaten_by(attempts)))
    }

    /// Store `(name, attempts)` if there is no record or it improves on it
    ///
    /// Returns `true` if the record was replaced.
    ///
    /// # Errors
    /// Returns `ScoreError` if the store cannot be read or written.
    fn save(&mut self, name: &str, attempts: usize) -> Result<bool, ScoreError> {
        if !self.qualifies(attempts)? {
            debug!(attempts, "score does not beat the record");
            return Ok(false);
        }
        let record = ScoreRecord::new(name, attempts);
        self.replace(&record)?;
        info!(name = %record.name, attempts, "new high score");
        Ok(true)
    }
}

/// Score store backed by a two-line text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

fn parse_record(content: &str) -> Result<ScoreRecord, ScoreError> {
    let mut lines = content.lines();
    let name = lines
        .next()
        .ok_or_else(|| ScoreError::Corrupt("missing player name".to_string()))?;
    let count = lines
        .next()
        .ok_or_else(|| ScoreError::Corrupt("missing attempt count".to_string()))?;
    let count = count.trim();
    let attempts = count
        .parse()
        .map_err(|_| ScoreError::Corrupt(format!("attempt count '{count}' is not a number")))?;

    Ok(ScoreRecord {
        name: name.to_string(),
        attempts,
    })
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Option<ScoreRecord>, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = parse_record(&content)?;
        debug!(path = %self.path.display(), attempts = record.attempts, "loaded high score");
        Ok(Some(record))
    }

    /// Write to a sibling temporary file, then rename it over the target
    fn replace(&mut self, record: &ScoreRecord) -> Result<(), ScoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        writeln!(file, "{record}")?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| ScoreError::Io(err.error))?;

        debug!(path = %self.path.display(), "high score written");
        Ok(())
    }
}

/// Score store kept in memory, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    record: Option<ScoreRecord>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(record: ScoreRecord) -> Self {
        Self {
            record: Some(record),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Option<ScoreRecord>, ScoreError> {
        Ok(self.record.clone())
    }

    fn replace(&mut self, record: &ScoreRecord) -> Result<(), ScoreError> {
        self.record = Some(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_store() -> (FileScoreStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileScoreStore::new(temp_dir.path().join("highscore.txt"));
        (store, temp_dir)
    }

    #[test]
    fn missing_file_means_no_record() {
        let (store, _temp) = create_temp_store();
        assert!(store.load().unwrap().is_none());
        assert!(store.qualifies(10).unwrap());
    }

    #[test]
    fn overwrite_only_on_improvement() {
        let (mut store, _temp) = create_temp_store();

        assert!(store.save("Ann", 5).unwrap());
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Ann", 5)));

        assert!(!store.save("Bob", 7).unwrap());
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Ann", 5)));

        assert!(store.save("Cid", 3).unwrap());
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Cid", 3)));
    }

    #[test]
    fn equal_score_does_not_replace() {
        let (mut store, _temp) = create_temp_store();
        store.save("Ann", 4).unwrap();
        assert!(!store.qualifies(4).unwrap());
        assert!(!store.save("Bob", 4).unwrap());
        assert_eq!(store.load().unwrap().unwrap().name, "Ann");
    }

    #[test]
    fn file_is_two_lines() {
        let (mut store, _temp) = create_temp_store();
        store.save("Ann", 5).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Ann\n5\n");
    }

    #[test]
    fn reads_file_without_trailing_newline() {
        let (store, _temp) = create_temp_store();
        fs::write(store.path(), "Dee\n 2 ").unwrap();
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Dee", 2)));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (mut store, _temp) = create_temp_store();

        fs::write(store.path(), "Ann\nlots\n").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::Corrupt(_))));
        assert!(store.save("Bob", 1).is_err());

        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::Corrupt(_))));

        fs::write(store.path(), "Ann\n").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::Corrupt(_))));
    }

    #[test]
    fn corrupt_count_reported_trimmed() {
        let (store, _temp) = create_temp_store();
        fs::write(store.path(), "Ann\n  lots \n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ScoreError::Corrupt(_)));
        assert!(err.to_string().contains("attempt count 'lots' is not a number"));
    }

    #[test]
    fn unwritable_location_is_io_error() {
        let (_, temp) = create_temp_store();
        let mut store = FileScoreStore::new(temp.path().join("missing").join("highscore.txt"));
        assert!(matches!(store.save("Ann", 3), Err(ScoreError::Io(_))));
    }

    #[test]
    fn replace_leaves_no_stray_files() {
        let (mut store, temp) = create_temp_store();
        store.save("Ann", 5).unwrap();
        store.save("Cid", 3).unwrap();
        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn record_name_normalised() {
        assert_eq!(ScoreRecord::new("  Ann  ", 3).name, "Ann");
        assert_eq!(ScoreRecord::new("", 3).name, "Anonymous");
        assert_eq!(ScoreRecord::new("A\nB", 3).name, "A B");
    }

    #[test]
    fn memory_store_same_policy() {
        let mut store = MemoryScoreStore::new();
        assert!(store.load().unwrap().is_none());
        assert!(store.save("Ann", 5).unwrap());
        assert!(!store.save("Bob", 7).unwrap());
        assert!(store.save("Cid", 3).unwrap());
        assert_eq!(store.load().unwrap(), Some(ScoreRecord::new("Cid", 3)));

        let seeded = MemoryScoreStore::with_record(ScoreRecord::new("Eve", 2));
        assert!(!seeded.qualifies(2).unwrap());
    }

    #[test]
    fn default_store_uses_default_path() {
        assert_eq!(
            FileScoreStore::default().path(),
            Path::new(DEFAULT_SCORE_FILE)
        );
    }
}
