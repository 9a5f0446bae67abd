//! High score persistence
//!
//! A single integer, loaded once at startup and overwritten whenever a run
//! ends above it. Loading never fails: anything unreadable counts as 0.

use std::io;
use std::path::{Path, PathBuf};

use crate::persistence::write_atomic;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// Where the best score lives between runs
pub trait HighScoreStore {
    /// Stored high score, or 0 when missing/corrupt
    fn load_high_score(&self) -> u32;
    /// Overwrite the stored value
    fn save_high_score(&mut self, score: u32) -> io::Result<()>;
}

/// Parse the stored text; tolerant of surrounding whitespace
pub fn parse_high_score(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Plain-text file holding the decimal score
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match parse_high_score(&text) {
                Some(score) => {
                    log::info!("Loaded high score {} from {}", score, self.path.display());
                    score
                }
                None => {
                    log::warn!("Corrupt high score in {}, starting at 0", self.path.display());
                    0
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) -> io::Result<()> {
        write_atomic(&self.path, score.to_string().as_bytes())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store (tests, embedding without a filesystem)
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub value: u32,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self) -> u32 {
        self.value
    }

    fn save_high_score(&mut self, score: u32) -> io::Result<()> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flappy-hs-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_high_score("12"), Some(12));
        assert_eq!(parse_high_score(" 7\n"), Some(7));
        assert_eq!(parse_high_score("abc"), None);
        assert_eq!(parse_high_score("-3"), None);
        assert_eq!(parse_high_score(""), None);
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = FileHighScoreStore::new(scratch("missing.txt"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let path = scratch("corrupt.txt");
        fs::write(&path, "not a number").unwrap();
        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.load_high_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_survives_reload() {
        let path = scratch("saved.txt");
        let mut store = FileHighScoreStore::new(&path);
        store.save_high_score(42).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");

        // A fresh store (new process) sees the last saved value
        let reopened = FileHighScoreStore::new(&path);
        assert_eq!(reopened.load_high_score(), 42);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryHighScoreStore::new(3);
        assert_eq!(store.load_high_score(), 3);
        store.save_high_score(9).unwrap();
        assert_eq!(store.load_high_score(), 9);
        assert_eq!(store.saves, 1);
    }
}
