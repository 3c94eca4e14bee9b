//! Score storage
//!
//! This module provides the `ScoreStore` trait the game world persists scores
//! through, and `JsonScoreStore`, which keeps them in a pretty-printed JSON file:
//! - A missing file loads as an empty list
//! - Saving writes the list exactly as given (no sorting, no dedup)
//! - The directory is created on first use

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait ScoreStore {
    fn load_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError>;

    fn save_scores(&self, scores: &[ScoreEntry]) -> Result<(), ScoreError>;
}

pub struct JsonScoreStore {
    directory: PathBuf,
}

impl JsonScoreStore {
    /// Creates a store keeping `scores.json` in `directory`.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(JsonScoreStore { directory })
    }

    /// `~/.asteroids`, falling back to the working directory when there is no home.
    pub fn default_directory() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".asteroids"))
            .unwrap_or_else(|| PathBuf::from(".asteroids"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(SCORES_FILE)
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        let path = self.path();

        if !path.exists() {
            debug!(path = %path.display(), "no score file yet");
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&path)?;
        let scores: Vec<ScoreEntry> = serde_json::from_str(&json)?;
        Ok(scores)
    }

    fn save_scores(&self, scores: &[ScoreEntry]) -> Result<(), ScoreError> {
        let path = self.path();

        // Pretty format so the file stays hand-editable
        let json = serde_json::to_string_pretty(scores)?;
        fs::write(&path, json)?;

        info!(path = %path.display(), entries = scores.len(), "scores saved");
        Ok(())
    }
}

/// The `count` best scores, highest first.
pub fn high_scores(scores: &[ScoreEntry], count: usize) -> Vec<ScoreEntry> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(count);
    sorted
}
