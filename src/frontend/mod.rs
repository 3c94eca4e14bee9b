//! SDL2 desktop front end.
//!
//! Everything that needs a window lives here: the texture table built from the
//! files the loader read, and `SdlSurface`, the `Surface` implementation the
//! game, menu and loading screen draw through.

pub mod surface;
pub mod textures;

pub use surface::SdlSurface;
pub use textures::TextureTable;
