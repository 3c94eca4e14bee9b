//! Screen HUD and transient text.
//!
//! - [`Message`] - floating, fading text posted by the world
//! - [`hud`] - score and lives readout drawn with the digit glyph table

pub mod hud;
pub mod message;

pub use message::Message;
