// Shared enums and helper structs used throughout the game

use crate::vector::Vector2D;

/// Top-level application state. The front end owns the current state and
/// switches screens when the game world asks it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Menu,
    Playing,
}

/// Playfield dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Arena { width, height }
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }
}
