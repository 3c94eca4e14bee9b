// Game module - Contains all game logic and state management
//
// This module contains:
// - world.rs: GameWorld struct, per-frame update and collision pass
// - callbacks.rs: WorldCallbacks, the capability moving objects act through
// - events.rs: scoring, explosions, meteor splits, lives and game over
// - spawning.rs: meteor waves and Ufo arrivals
// - rendering.rs: drawing the world and the HUD
// - config.rs: GameConfig loaded from JSON
// - constants.rs: fixed gameplay tunables
// - types.rs: Shared enums and helper structs

// Module declarations
pub mod callbacks;
pub mod config;
pub mod constants;
pub mod events;
pub mod rendering;
pub mod spawning;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use callbacks::WorldCallbacks;
pub use config::{ConfigError, GameConfig};
pub use types::*;
pub use world::GameWorld;
