//! On-screen text messages ("+20 score", "WAVE 3", "GAME OVER").
//!
//! A message drifts upward one pixel per frame while its opacity changes by a
//! fixed step per frame:
//!
//! - **Fading** messages start fully opaque and die the first frame their
//!   opacity drops below zero.
//! - **Growing** messages start transparent, brighten until fully opaque, then
//!   switch to fading for the rest of their life. They never brighten again.
//!
//! # Example
//!
//! ```ignore
//! let mut msg = Message::new(position, true, "+20 score", Color::WHITE, false, FontSize::Medium);
//! msg.advance(FRAME_TIME);
//! msg.draw(&mut surface)?;
//! ```

use crate::game::constants::frames_in;
use crate::render::{Color, Drawable, FontSize, Surface};
use crate::vector::Vector2D;
use std::time::Duration;

/// Opacity change per frame.
const DELTA_OPACITY: f32 = 0.01;

/// Upward drift in pixels per frame.
const DRIFT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Message {
    text: String,
    color: Color,
    font: FontSize,
    position: Vector2D,
    centered: bool,
    fade: bool,
    opacity: f32,
    dead: bool,
}

impl Message {
    pub fn new(
        position: Vector2D,
        fade: bool,
        text: impl Into<String>,
        color: Color,
        centered: bool,
        font: FontSize,
    ) -> Self {
        Message {
            text: text.into(),
            color,
            font,
            position,
            centered,
            fade,
            opacity: if fade { 1.0 } else { 0.0 },
            dead: false,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.dead {
            return;
        }

        let frames = frames_in(dt);
        self.position.y -= DRIFT * frames;

        let step = DELTA_OPACITY * frames as f32;
        if self.fade {
            self.opacity -= step;
        } else {
            self.opacity += step;
        }

        if self.fade && self.opacity < 0.0 {
            self.dead = true;
        }

        if !self.fade && self.opacity > 1.0 {
            self.fade = true;
            self.opacity = 1.0;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_fading(&self) -> bool {
        self.fade
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

}

impl Drawable for Message {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.draw_text(
            &self.text,
            self.position,
            self.centered,
            self.color,
            self.font,
            self.opacity.clamp(0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::FRAME_TIME;
    use crate::render::HeadlessSurface;

    fn fading() -> Message {
        Message::new(
            Vector2D::new(100.0, 100.0),
            true,
            "+20 score",
            Color::WHITE,
            false,
            FontSize::Medium,
        )
    }

    fn growing() -> Message {
        Message::new(
            Vector2D::new(500.0, 300.0),
            false,
            "WAVE 1",
            Color::WHITE,
            true,
            FontSize::Big,
        )
    }

    #[test]
    fn test_fading_message_dies_on_first_negative_opacity() {
        let mut msg = fading();
        assert_eq!(msg.opacity(), 1.0);

        let mut previous = msg.opacity();
        let mut frames = 0;
        while !msg.is_dead() {
            msg.advance(FRAME_TIME);
            frames += 1;
            assert!(msg.opacity() < previous, "opacity must decrease while fading");
            assert_eq!(msg.is_dead(), msg.opacity() < 0.0);
            previous = msg.opacity();
            assert!(frames < 200, "fading message never died");
        }
    }

    #[test]
    fn test_growing_message_flips_to_fade_once() {
        let mut msg = growing();
        assert_eq!(msg.opacity(), 0.0);
        assert!(!msg.is_fading());

        let mut previous = msg.opacity();
        while !msg.is_fading() {
            msg.advance(FRAME_TIME);
            assert!(msg.opacity() >= previous);
            previous = msg.opacity();
        }
        assert_eq!(msg.opacity(), 1.0);

        let mut frames = 0;
        while !msg.is_dead() {
            msg.advance(FRAME_TIME);
            assert!(msg.is_fading(), "growth direction must never flip back");
            assert!(msg.opacity() < previous);
            previous = msg.opacity();
            frames += 1;
            assert!(frames < 200, "growing message never died");
        }
    }

    #[test]
    fn test_message_drifts_upward() {
        let mut msg = fading();
        msg.advance(FRAME_TIME);
        msg.advance(FRAME_TIME);
        assert!((msg.position().y - 98.0).abs() < 1e-3);
        assert_eq!(msg.position().x, 100.0);
    }

    #[test]
    fn test_draw_clamps_opacity_and_keeps_alignment() {
        let msg = growing();
        let mut surface = HeadlessSurface::new();
        msg.draw(&mut surface).unwrap();

        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["WAVE 1"]);
        match &surface.calls[0] {
            crate::render::DrawCall::Text {
                centered, opacity, ..
            } => {
                assert!(*centered);
                assert_eq!(*opacity, 0.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }
}
