//! Screen-Space GUI System
//!
//! Full-screen states other than the game itself. Both draw through the
//! `Surface` trait with screen coordinates, so they can be tested headless.
//!
//! # Available Components
//!
//! - [`Menu`] - Main menu with PLAY/EXIT and the high score list
//! - [`draw_loading`] - Loading screen progress bar
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::{Menu, MenuOption};
//!
//! let mut menu = Menu::new(scores);
//!
//! // Handle input
//! menu.select_next();
//!
//! // Render
//! menu.draw(&mut surface, 1000.0, 600.0)?;
//!
//! // Check selection
//! match menu.selected() {
//!     MenuOption::Play => { /* ... */ }
//!     MenuOption::Exit => { /* ... */ }
//! }
//! ```

pub mod loading;
pub mod menu;

pub use loading::draw_loading;
pub use menu::{Menu, MenuOption};
