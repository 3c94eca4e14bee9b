//! Rendering contract between the simulation and whatever draws it.
//!
//! The game core never talks to SDL2 directly. Everything it draws goes through
//! the `Surface` trait, which mirrors the handful of primitives the SDL2 canvas
//! offers (copy a texture, draw text, fill/outline a rectangle).
//!
//! # Architecture
//!
//! - `Surface`: drawing primitives, implemented by the SDL front end
//! - `Drawable`: implemented by entities and effects that know how to draw themselves
//! - `HeadlessSurface`: records draw calls instead of rendering (tests, benchmarks)
//!
//! Errors are `String`s, matching what the SDL2 canvas returns.
use crate::assets::SpriteId;
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Text sizes used by the game. The front end maps each to a glyph scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Medium,
    Big,
}

pub trait Surface {
    /// Draws `sprite` with its top-left corner at `(x, y)`, rotated by
    /// `rotation` radians around its center.
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64, rotation: f64)
        -> Result<(), String>;

    /// Draws `text` at `position`. When `centered` is set, `position` is the
    /// center of the text instead of its top-left corner.
    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2D,
        centered: bool,
        color: Color,
        font: FontSize,
        opacity: f32,
    ) -> Result<(), String>;

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color)
        -> Result<(), String>;

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color)
        -> Result<(), String>;
}

/// Anything that renders itself onto a `Surface`.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String>;
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite {
        sprite: SpriteId,
        x: f64,
        y: f64,
        rotation: f64,
    },
    Text {
        text: String,
        position: Vector2D,
        centered: bool,
        font: FontSize,
        opacity: f32,
    },
    FillRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    DrawRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub calls: Vec<DrawCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        HeadlessSurface::default()
    }

    pub fn sprites(&self) -> impl Iterator<Item = (SpriteId, f64, f64)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sprite { sprite, x, y, .. } => Some((*sprite, *x, *y)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for HeadlessSurface {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64, rotation: f64) -> Result<(), String> {
        self.calls.push(DrawCall::Sprite {
            sprite,
            x,
            y,
            rotation,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2D,
        centered: bool,
        _color: Color,
        font: FontSize,
        opacity: f32,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            centered,
            font,
            opacity,
        });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        _color: Color,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        _color: Color,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::DrawRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }
}
