use crate::assets::{Assets, EXPLOSION_FRAMES, SpriteId};
use crate::render::{Drawable, Surface};
use crate::vector::Vector2D;
use std::time::Duration;

/// How long each explosion frame stays on screen.
pub const EXPLOSION_FRAME_TIME: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub sprite: SpriteId,
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

impl Frame {
    pub fn new(sprite: SpriteId, assets: &Assets, duration: Duration) -> Self {
        let size = assets.size(sprite);
        Frame {
            sprite,
            width: size.width,
            height: size.height,
            duration,
        }
    }
}

/// A play-once frame sequence anchored at a world position.
///
/// Game Dev Pattern: Visual Effects (VFX)
/// Explosions are pure visuals: they never collide and never affect score. The
/// world advances them once per frame and drops them as soon as they stop.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    current_frame: usize,
    frame_elapsed: Duration,
    is_playing: bool,
    /// Center of the effect.
    position: Vector2D,
}

impl Animation {
    pub fn new(frames: Vec<Frame>, position: Vector2D) -> Self {
        let is_playing = !frames.is_empty();
        Animation {
            frames,
            current_frame: 0,
            frame_elapsed: Duration::ZERO,
            is_playing,
            position,
        }
    }

    /// Builds the standard explosion strip centered on `position`.
    pub fn explosion(assets: &Assets, position: Vector2D) -> Self {
        let frames = (0..EXPLOSION_FRAMES)
            .map(|i| Frame::new(SpriteId::Explosion(i), assets, EXPLOSION_FRAME_TIME))
            .collect();
        Animation::new(frames, position)
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.is_playing {
            return;
        }

        self.frame_elapsed += dt;

        // A long frame delta may skip several frames at once
        while self.is_playing && self.frame_elapsed >= self.frames[self.current_frame].duration {
            self.frame_elapsed -= self.frames[self.current_frame].duration;

            if self.current_frame + 1 < self.frames.len() {
                self.current_frame += 1;
            } else {
                self.is_playing = false;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_playing
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.current_frame)
    }

    pub fn frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }
}

impl Drawable for Animation {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if !self.is_playing {
            return Ok(());
        }
        let Some(frame) = self.current_frame() else {
            return Ok(());
        };

        surface.draw_sprite(
            frame.sprite,
            self.position.x - f64::from(frame.width) / 2.0,
            self.position.y - f64::from(frame.height) / 2.0,
            0.0,
        )
    }
}
