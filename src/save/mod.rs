//! Score persistence
//!
//! Finished games are appended to a JSON score list:
//! - JSON file (human-readable, debuggable)
//! - Stored under `~/.asteroids/scores.json` by default
//! - Trait-based so the game world can be tested without touching the disk
//!
//! # Architecture
//!
//! - `types`: `ScoreEntry` and error types
//! - `manager`: `ScoreStore` trait and the JSON file implementation
//!
//! # Example Usage
//!
//! ```ignore
//! let store = JsonScoreStore::new(JsonScoreStore::default_directory())?;
//!
//! let mut scores = store.load_scores()?;
//! scores.push(ScoreEntry::today(1240));
//! store.save_scores(&scores)?;
//! ```

pub mod manager;
pub mod types;

// Re-export commonly used types
pub use manager::{JsonScoreStore, ScoreStore, high_scores};
pub use types::*;
