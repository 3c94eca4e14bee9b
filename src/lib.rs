//! Runtime core of an asteroids-style arcade shooter.
//!
//! The simulation (`game`, the moving objects, effects, collision, scores) is
//! plain Rust and draws through the [`render::Surface`] trait, so it runs and
//! tests headless. The SDL2 window, textures and keyboard live behind the
//! `sdl` feature in [`frontend`] and the `asteroids` binary.

pub mod animation;
pub mod assets;
pub mod chronometer;
pub mod collision;
pub mod font;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod loader;
pub mod meteor;
pub mod moving_object;
pub mod player;
pub mod projectile;
pub mod render;
pub mod save;
pub mod ufo;
pub mod ui;
pub mod vector;

#[cfg(feature = "sdl")]
pub mod frontend;
