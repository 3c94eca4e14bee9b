//! Loading Screen
//!
//! A progress bar with a caption, shown while the asset loader reads files.

use crate::render::{Color, FontSize, Surface};
use crate::vector::Vector2D;

const BAR_WIDTH: u32 = 500;
const BAR_HEIGHT: u32 = 20;

/// Draws the loading bar for `progress` in `[0, 1]`, centered in a
/// `width` x `height` screen.
pub fn draw_loading(
    surface: &mut dyn Surface,
    progress: f32,
    width: f64,
    height: f64,
) -> Result<(), String> {
    let progress = progress.clamp(0.0, 1.0);
    let x = (width / 2.0) as i32 - BAR_WIDTH as i32 / 2;
    let y = (height / 2.0) as i32 - BAR_HEIGHT as i32 / 2;

    let filled = (BAR_WIDTH as f32 * progress) as u32;
    if filled > 0 {
        surface.fill_rect(x, y, filled, BAR_HEIGHT, Color::rgb(52, 152, 219))?;
    }
    surface.draw_rect(x, y, BAR_WIDTH, BAR_HEIGHT, Color::WHITE)?;

    surface.draw_text(
        "ASTEROIDS CLONE",
        Vector2D::new(width / 2.0, height / 2.0 - 50.0),
        true,
        Color::WHITE,
        FontSize::Medium,
        1.0,
    )?;
    surface.draw_text(
        "LOADING...",
        Vector2D::new(width / 2.0, height / 2.0 + 40.0),
        true,
        Color::WHITE,
        FontSize::Medium,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, HeadlessSurface};

    fn fill_width(surface: &HeadlessSurface) -> Option<u32> {
        surface.calls.iter().find_map(|call| match call {
            DrawCall::FillRect { width, .. } => Some(*width),
            _ => None,
        })
    }

    #[test]
    fn test_bar_fills_with_progress() {
        let mut surface = HeadlessSurface::new();
        draw_loading(&mut surface, 0.5, 1000.0, 600.0).unwrap();
        assert_eq!(fill_width(&surface), Some(250));
    }

    #[test]
    fn test_empty_bar_has_outline_only() {
        let mut surface = HeadlessSurface::new();
        draw_loading(&mut surface, 0.0, 1000.0, 600.0).unwrap();
        assert_eq!(fill_width(&surface), None);
        assert!(
            surface
                .calls
                .iter()
                .any(|call| matches!(call, DrawCall::DrawRect { x: 250, y: 290, .. }))
        );
    }

    #[test]
    fn test_captions_frame_the_bar() {
        let mut surface = HeadlessSurface::new();
        draw_loading(&mut surface, 0.3, 1000.0, 600.0).unwrap();

        let captions: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, position, .. } => Some((text.as_str(), position.y)),
                _ => None,
            })
            .collect();
        assert_eq!(captions, vec![("ASTEROIDS CLONE", 250.0), ("LOADING...", 340.0)]);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut surface = HeadlessSurface::new();
        draw_loading(&mut surface, 3.0, 1000.0, 600.0).unwrap();
        assert_eq!(fill_width(&surface), Some(BAR_WIDTH));
    }
}
