//! `Surface` on top of an SDL2 canvas.

use crate::assets::SpriteId;
use crate::font;
use crate::render::{Color, FontSize, Surface};
use crate::vector::Vector2D;
use sdl2::pixels;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use super::textures::TextureTable;

fn to_sdl(color: Color, opacity: f32) -> pixels::Color {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    pixels::Color::RGBA(color.r, color.g, color.b, alpha)
}

/// Glyph scale for each font size.
fn scale_for(font: FontSize) -> u32 {
    match font {
        FontSize::Medium => 2,
        FontSize::Big => 4,
    }
}

/// Draws onto `canvas`. Without a texture table (while loading) only text and
/// rectangles can be drawn.
pub struct SdlSurface<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    textures: Option<&'c TextureTable<'t>>,
}

impl<'c, 't> SdlSurface<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, textures: Option<&'c TextureTable<'t>>) -> Self {
        SdlSurface { canvas, textures }
    }
}

impl Surface for SdlSurface<'_, '_> {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64, rotation: f64) -> Result<(), String> {
        let texture = self
            .textures
            .and_then(|table| table.get(sprite))
            .ok_or_else(|| format!("No texture for {:?}", sprite))?;
        let query = texture.query();

        self.canvas.copy_ex(
            texture,
            None,
            Some(Rect::new(x.round() as i32, y.round() as i32, query.width, query.height)),
            rotation.to_degrees(),
            None,
            false,
            false,
        )
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2D,
        centered: bool,
        color: Color,
        font: FontSize,
        opacity: f32,
    ) -> Result<(), String> {
        let scale = scale_for(font);
        let (width, height) = font::text_size(text, scale);

        let (mut x, mut y) = (position.x.round() as i32, position.y.round() as i32);
        if centered {
            x -= width as i32 / 2;
            y -= height as i32 / 2;
        }

        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(to_sdl(color, opacity));

        // Draw the text pixel by pixel
        for (col, row) in font::lit_pixels(text) {
            self.canvas.fill_rect(Rect::new(
                x + (col * scale) as i32,
                y + (row * scale) as i32,
                scale,
                scale,
            ))?;
        }

        self.canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl(color, 1.0));
        self.canvas.fill_rect(Rect::new(x, y, width, height))
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl(color, 1.0));
        self.canvas.draw_rect(Rect::new(x, y, width, height))
    }
}
