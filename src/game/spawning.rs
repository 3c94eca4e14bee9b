// Spawning policy: waves of meteors and Ufo arrivals

use crate::meteor::{Meteor, MeteorSize};
use crate::moving_object::MovingObject;
use crate::render::{Color, FontSize};
use crate::ufo::Ufo;
use crate::ui::Message;
use crate::vector::Vector2D;
use rand::Rng;
use std::f64::consts::TAU;
use tracing::{debug, info};

use super::world::WorldState;

impl WorldState {
    /// Announces the next wave and queues its big meteors along the top and
    /// left edges. Each wave brings one more meteor than the last.
    pub(super) fn start_wave(&mut self) {
        self.wave += 1;
        self.messages.push(Message::new(
            self.arena.center(),
            false,
            format!("WAVE {}", self.wave),
            Color::WHITE,
            true,
            FontSize::Big,
        ));

        for i in 0..self.meteors {
            let position = if i % 2 == 0 {
                Vector2D::new(self.rng.gen_range(0.0..self.arena.width), 0.0)
            } else {
                Vector2D::new(0.0, self.rng.gen_range(0.0..self.arena.height))
            };

            let meteor = self.random_meteor(position, MeteorSize::Big);
            self.spawned.push(MovingObject::Meteor(meteor));
        }

        info!(wave = self.wave, meteors = self.meteors, "wave started");
        self.meteors += 1;
    }

    /// Queues a Ufo on a random edge of the arena with a fresh path.
    pub(super) fn spawn_ufo(&mut self) {
        let arena = self.arena;
        let rng = &mut self.rng;

        let position = match rng.gen_range(0..4) {
            0 => Vector2D::new(rng.gen_range(0.0..arena.width), 0.0),
            1 => Vector2D::new(rng.gen_range(0.0..arena.width), arena.height),
            2 => Vector2D::new(0.0, rng.gen_range(0.0..arena.height)),
            _ => Vector2D::new(arena.width, rng.gen_range(0.0..arena.height)),
        };
        let path = Ufo::random_path(arena, rng);

        debug!(x = position.x, y = position.y, "ufo spawned");
        let ufo = Ufo::new(position, path, &self.assets);
        self.spawned.push(MovingObject::Ufo(ufo));
    }

    /// A meteor of `size` at `position` with a random heading, speed and sprite.
    pub(super) fn random_meteor(&mut self, position: Vector2D, size: MeteorSize) -> Meteor {
        let direction = Vector2D::new(0.0, 1.0).set_direction(self.rng.gen_range(0.0..TAU));
        let speed = self
            .rng
            .gen_range(self.config.meteor_min_speed..=self.config.meteor_max_speed);
        let variant = self.rng.gen_range(0..size.variants());

        Meteor::new(position, direction, speed, size, variant, &self.assets)
    }
}
