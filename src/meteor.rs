//! Meteors: the drifting rocks the player has to clear to finish a wave.
//!
//! A meteor keeps the direction and speed it was spawned with, spins slowly and
//! wraps around the arena edges. Shooting one splits it into smaller meteors
//! until the smallest size, which simply disappears.

use crate::assets::{Assets, SpriteId};
use crate::game::callbacks::WorldCallbacks;
use crate::game::constants::{METEOR_SCORE, METEOR_SPIN};
use crate::moving_object::Body;
use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeteorSize {
    Big,
    Med,
    Small,
    Tiny,
}

impl MeteorSize {
    pub const ALL: [MeteorSize; 4] = [
        MeteorSize::Big,
        MeteorSize::Med,
        MeteorSize::Small,
        MeteorSize::Tiny,
    ];

    /// The size a meteor of this size splits into. Tiny meteors don't split.
    pub fn next(self) -> Option<MeteorSize> {
        match self {
            MeteorSize::Big => Some(MeteorSize::Med),
            MeteorSize::Med => Some(MeteorSize::Small),
            MeteorSize::Small => Some(MeteorSize::Tiny),
            MeteorSize::Tiny => None,
        }
    }

    /// How many children a meteor of this size splits into.
    pub fn quantity(self) -> usize {
        match self {
            MeteorSize::Big | MeteorSize::Med | MeteorSize::Small => 2,
            MeteorSize::Tiny => 0,
        }
    }

    /// Number of sprite variants available for this size.
    pub fn variants(self) -> u8 {
        match self {
            MeteorSize::Big => 4,
            MeteorSize::Med | MeteorSize::Small | MeteorSize::Tiny => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Meteor {
    body: Body,
    size: MeteorSize,
}

impl Meteor {
    /// Creates a meteor moving along `direction` at `speed` px/s.
    ///
    /// `variant` picks the sprite among the ones available for `size` and is
    /// wrapped into range.
    pub fn new(
        position: Vector2D,
        direction: Vector2D,
        speed: f64,
        size: MeteorSize,
        variant: u8,
        assets: &Assets,
    ) -> Self {
        let sprite = SpriteId::Meteor {
            size,
            variant: variant % size.variants(),
        };
        let velocity = direction.normalize().scale(speed);

        Meteor {
            body: Body::new(position, velocity, speed, sprite, assets),
            size,
        }
    }

    pub fn size(&self) -> MeteorSize {
        self.size
    }

    pub fn position(&self) -> Vector2D {
        self.body.position
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn update(&mut self, dt: Duration, world: &mut dyn WorldCallbacks) {
        self.body.angle += METEOR_SPIN * dt.as_secs_f64();
        self.body.integrate(dt);
        self.body.wrap(world.arena());
    }

    pub fn on_hit(&mut self, world: &mut dyn WorldCallbacks) {
        self.body.dead = true;
        world.play_explosion(self.body.position);
        world.divide_meteor(self);
        world.add_score(METEOR_SCORE, self.body.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::callbacks::tests::RecordingWorld;

    #[test]
    fn test_split_chain() {
        assert_eq!(MeteorSize::Big.next(), Some(MeteorSize::Med));
        assert_eq!(MeteorSize::Med.next(), Some(MeteorSize::Small));
        assert_eq!(MeteorSize::Small.next(), Some(MeteorSize::Tiny));
        assert_eq!(MeteorSize::Tiny.next(), None);

        let quantities: Vec<_> = MeteorSize::ALL.iter().map(|s| s.quantity()).collect();
        assert_eq!(quantities, vec![2, 2, 2, 0]);
    }

    #[test]
    fn test_velocity_is_direction_times_speed() {
        let meteor = Meteor::new(
            Vector2D::new(100.0, 100.0),
            Vector2D::new(0.0, 3.0),
            120.0,
            MeteorSize::Big,
            1,
            &Assets::default(),
        );
        assert_eq!(meteor.body().velocity, Vector2D::new(0.0, 120.0));
        assert_eq!(meteor.body().max_speed, 120.0);
    }

    #[test]
    fn test_variant_wraps_into_range() {
        let meteor = Meteor::new(
            Vector2D::ZERO,
            Vector2D::new(1.0, 0.0),
            60.0,
            MeteorSize::Tiny,
            5,
            &Assets::default(),
        );
        assert_eq!(
            meteor.body().sprite,
            SpriteId::Meteor {
                size: MeteorSize::Tiny,
                variant: 1
            }
        );
    }

    #[test]
    fn test_update_keeps_speed_and_spins() {
        let mut world = RecordingWorld::new();
        let mut meteor = Meteor::new(
            Vector2D::new(500.0, 300.0),
            Vector2D::new(1.0, 0.0),
            60.0,
            MeteorSize::Med,
            0,
            &Assets::default(),
        );

        meteor.update(Duration::from_secs(1), &mut world);

        assert_eq!(meteor.position(), Vector2D::new(560.0, 300.0));
        assert_eq!(meteor.body().velocity.magnitude(), 60.0);
        assert!(meteor.body().angle > 0.0);
    }

    #[test]
    fn test_on_hit_scores_explodes_and_splits() {
        let mut world = RecordingWorld::new();
        let mut meteor = Meteor::new(
            Vector2D::new(200.0, 200.0),
            Vector2D::new(1.0, 0.0),
            60.0,
            MeteorSize::Big,
            0,
            &Assets::default(),
        );

        meteor.on_hit(&mut world);

        assert!(meteor.body().dead);
        assert_eq!(world.explosions, vec![Vector2D::new(200.0, 200.0)]);
        assert_eq!(world.divided, vec![MeteorSize::Big]);
        assert_eq!(world.scores, vec![(METEOR_SCORE, Vector2D::new(200.0, 200.0))]);
    }
}
