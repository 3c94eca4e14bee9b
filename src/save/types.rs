//! Score data types
//!
//! The score file is a JSON array of `ScoreEntry`, appended to at the end of
//! every game.

use serde::{Deserialize, Serialize};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Local date the game ended, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

impl ScoreEntry {
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        ScoreEntry {
            score,
            date: date.into(),
        }
    }

    /// An entry dated today.
    pub fn today(score: u32) -> Self {
        ScoreEntry::new(score, chrono::Local::now().format("%Y-%m-%d").to_string())
    }
}

/// Error types for score load/save operations
#[derive(Debug)]
pub enum ScoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::IoError(e) => write!(f, "IO error: {}", e),
            ScoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        ScoreError::IoError(err)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::SerializationError(err)
    }
}

/// Name of the score file inside the score directory.
pub const SCORES_FILE: &str = "scores.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_uses_iso_date() {
        let entry = ScoreEntry::today(10);
        assert_eq!(entry.date.len(), 10);
        assert_eq!(entry.date.as_bytes()[4], b'-');
        assert_eq!(entry.date.as_bytes()[7], b'-');
    }

    #[test]
    fn test_entry_without_date_still_loads() {
        let entry: ScoreEntry = serde_json::from_str(r#"{ "score": 40 }"#).unwrap();
        assert_eq!(entry, ScoreEntry::new(40, ""));
    }
}
