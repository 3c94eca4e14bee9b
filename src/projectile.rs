use crate::assets::{Assets, SpriteId};
use crate::chronometer::Chronometer;
use crate::game::callbacks::WorldCallbacks;
use crate::game::constants::{LASER_LIFESPAN, LASER_VEL};
use crate::moving_object::Body;
use crate::vector::Vector2D;
use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

/// Who fired a projectile. Projectiles never hurt their own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    /// Fired by the player.
    Friendly,
    /// Fired by a Ufo.
    Hostile,
}

/// A laser bolt flying in a straight line.
#[derive(Debug, Clone)]
pub struct Projectile {
    body: Body,
    faction: Faction,
    lifespan: Chronometer,
}

impl Projectile {
    pub fn new(position: Vector2D, direction: Vector2D, faction: Faction, assets: &Assets) -> Self {
        let sprite = match faction {
            Faction::Friendly => SpriteId::GreenLaser,
            Faction::Hostile => SpriteId::RedLaser,
        };
        let velocity = direction.normalize().scale(LASER_VEL);

        let mut body = Body::new(position, velocity, LASER_VEL, sprite, assets);
        // Laser sprites point up; angle 0 of the velocity points right.
        body.angle = velocity.angle() + FRAC_PI_2;

        let mut lifespan = Chronometer::new();
        lifespan.run(LASER_LIFESPAN);

        Projectile {
            body,
            faction,
            lifespan,
        }
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn update(&mut self, dt: Duration, world: &mut dyn WorldCallbacks) {
        self.body.integrate(dt);
        self.lifespan.update(dt);

        if !self.lifespan.is_running() || self.body.is_off_screen(world.arena()) {
            self.body.dead = true;
        }
    }

    pub fn on_hit(&mut self) {
        self.body.dead = true;
    }
}
