//! Flying saucers.
//!
//! A Ufo enters from an edge and flies through four waypoints, one in each
//! quadrant of the arena, steering toward the current one with a seek force.
//! After the last waypoint it keeps going until it leaves the screen. While a
//! player is alive it fires at them, with some random aim error.

use crate::assets::{Assets, SpriteId};
use crate::chronometer::Chronometer;
use crate::game::callbacks::WorldCallbacks;
use crate::game::constants::{
    NODE_RADIUS, UFO_ANGLE_RANGE, UFO_FIRE_RATE, UFO_MASS, UFO_MAX_VEL, UFO_SCORE, frames_in,
};
use crate::game::types::Arena;
use crate::moving_object::{Body, MovingObject};
use crate::projectile::{Faction, Projectile};
use crate::vector::Vector2D;
use rand::{Rng, RngCore};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Ufo {
    body: Body,
    path: Vec<Vector2D>,
    index: usize,
    following: bool,
    fire_rate: Chronometer,
}

impl Ufo {
    pub fn new(position: Vector2D, path: Vec<Vector2D>, assets: &Assets) -> Self {
        let mut fire_rate = Chronometer::new();
        fire_rate.run(UFO_FIRE_RATE);

        Ufo {
            body: Body::new(position, Vector2D::ZERO, UFO_MAX_VEL, SpriteId::Ufo, assets),
            following: !path.is_empty(),
            path,
            index: 0,
            fire_rate,
        }
    }

    /// One random waypoint per quadrant: top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn random_path(arena: Arena, rng: &mut dyn RngCore) -> Vec<Vector2D> {
        let half_w = arena.width / 2.0;
        let half_h = arena.height / 2.0;

        [(0.0, 0.0), (half_w, 0.0), (0.0, half_h), (half_w, half_h)]
            .into_iter()
            .map(|(x, y)| {
                Vector2D::new(
                    x + rng.gen_range(0.0..half_w),
                    y + rng.gen_range(0.0..half_h),
                )
            })
            .collect()
    }

    pub fn path(&self) -> &[Vector2D] {
        &self.path
    }

    /// Index of the waypoint currently steered toward.
    pub fn path_index(&self) -> usize {
        self.index
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn update(&mut self, dt: Duration, world: &mut dyn WorldCallbacks) {
        if self.following {
            let target = self.path[self.index];
            if self.body.position.distance(target) < NODE_RADIUS {
                self.index += 1;
                if self.index >= self.path.len() {
                    self.following = false;
                }
            }
        }

        if self.following {
            let steering = self.seek(self.path[self.index]);
            self.body.velocity += steering.scale(frames_in(dt));
            self.body.velocity = self.body.velocity.limit(self.body.max_speed);
        }

        self.body.integrate(dt);

        if self.body.is_off_screen(world.arena()) {
            self.body.dead = true;
            return;
        }

        self.fire_rate.update(dt);
        if !self.fire_rate.is_running() {
            if let Some(target) = world.player_center() {
                self.shoot(target, world);
            }
        }
    }

    pub fn on_hit(&mut self, world: &mut dyn WorldCallbacks) {
        self.body.dead = true;
        world.add_score(UFO_SCORE, self.body.position);
        world.play_explosion(self.body.position);
    }

    /// Per-frame steering force toward `target`.
    fn seek(&self, target: Vector2D) -> Vector2D {
        let desired = (target - self.body.position).normalize().scale(self.body.max_speed);
        (desired - self.body.velocity).scale(1.0 / UFO_MASS)
    }

    fn shoot(&mut self, target: Vector2D, world: &mut dyn WorldCallbacks) {
        let aim = (target - self.body.position).angle();
        let jitter = world
            .rng()
            .gen_range(-UFO_ANGLE_RANGE / 2.0..UFO_ANGLE_RANGE / 2.0);
        let direction = Vector2D::from_angle(aim + jitter);

        let muzzle = self.body.position + direction.scale(self.body.radius());
        let laser = Projectile::new(muzzle, direction, Faction::Hostile, world.assets());
        world.spawn(MovingObject::Projectile(laser));

        self.fire_rate.run(UFO_FIRE_RATE);
    }
}
