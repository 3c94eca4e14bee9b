//! The player's ship.
//!
//! Controls are tank-style: left/right rotate the ship, up thrusts along the
//! heading, space fires. Without thrust the ship coasts and slowly comes to a
//! stop. After losing a life the ship goes back to its start position and is
//! invulnerable for a few seconds, flickering while it is.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut player = Player::new(arena.center(), &assets);
//! player.update(dt, &input, &mut world_callbacks);
//! player.draw(&mut surface)?;
//! ```

use crate::assets::{Assets, SpriteId};
use crate::chronometer::Chronometer;
use crate::game::callbacks::WorldCallbacks;
use crate::game::constants::{
    FIRE_RATE, FLICKER_TIME, PLAYER_ACCELERATION, PLAYER_MAX_VEL, PLAYER_TURN_RATE, SPAWNING_TIME,
};
use crate::input_system::InputState;
use crate::moving_object::{Body, MovingObject};
use crate::projectile::{Faction, Projectile};
use crate::render::Surface;
use crate::vector::Vector2D;
use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    /// Unit vector the nose points along.
    heading: Vector2D,
    start: Vector2D,
    fire_rate: Chronometer,
    spawning: Chronometer,
    flicker: Chronometer,
    visible: bool,
}

impl Player {
    pub fn new(start: Vector2D, assets: &Assets) -> Self {
        Player {
            body: Body::new(start, Vector2D::ZERO, PLAYER_MAX_VEL, SpriteId::Player, assets),
            heading: heading_for(0.0),
            start,
            fire_rate: Chronometer::new(),
            spawning: Chronometer::new(),
            flicker: Chronometer::new(),
            visible: true,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn heading(&self) -> Vector2D {
        self.heading
    }

    /// True while the ship is respawning. It can't be hit and can't shoot.
    pub fn is_invulnerable(&self) -> bool {
        self.spawning.is_running()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update(&mut self, dt: Duration, input: &InputState, world: &mut dyn WorldCallbacks) {
        let secs = dt.as_secs_f64();

        if input.left {
            self.body.angle -= PLAYER_TURN_RATE * secs;
        }
        if input.right {
            self.body.angle += PLAYER_TURN_RATE * secs;
        }
        self.heading = heading_for(self.body.angle);

        if input.up {
            self.body.velocity += self.heading.scale(PLAYER_ACCELERATION * secs);
        } else {
            self.apply_drag(PLAYER_ACCELERATION / 2.0 * secs);
        }
        self.body.velocity = self.body.velocity.limit(self.body.max_speed);

        self.body.integrate(dt);
        self.body.wrap(world.arena());

        self.fire_rate.update(dt);
        if input.shoot && !self.fire_rate.is_running() && !self.is_invulnerable() {
            self.shoot(world);
        }

        self.update_spawning(dt);
    }

    pub fn on_hit(&mut self, world: &mut dyn WorldCallbacks) {
        world.play_explosion(self.body.position);

        if !world.subtract_life() {
            world.game_over();
            self.body.dead = true;
            return;
        }

        self.respawn();
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        self.body.draw(surface)
    }

    /// Slows the ship down by `amount` px/s, stopping at zero instead of
    /// reversing.
    fn apply_drag(&mut self, amount: f64) {
        let speed = self.body.velocity.magnitude();
        if speed <= amount {
            self.body.velocity = Vector2D::ZERO;
        } else {
            self.body.velocity = self.body.velocity.normalize().scale(speed - amount);
        }
    }

    fn shoot(&mut self, world: &mut dyn WorldCallbacks) {
        let nose = self.body.position + self.heading.scale(self.body.radius());
        let laser = Projectile::new(nose, self.heading, Faction::Friendly, world.assets());
        world.spawn(MovingObject::Projectile(laser));
        self.fire_rate.run(FIRE_RATE);
    }

    fn respawn(&mut self) {
        self.body.position = self.start;
        self.body.velocity = Vector2D::ZERO;
        self.body.angle = 0.0;
        self.heading = heading_for(0.0);

        self.spawning.run(SPAWNING_TIME);
        self.flicker.run(FLICKER_TIME);
        self.visible = false;
    }

    fn update_spawning(&mut self, dt: Duration) {
        self.spawning.update(dt);

        if !self.spawning.is_running() {
            self.visible = true;
            return;
        }

        self.flicker.update(dt);
        if !self.flicker.is_running() {
            self.visible = !self.visible;
            self.flicker.run(FLICKER_TIME);
        }
    }
}

/// The ship sprite points up at angle 0.
fn heading_for(angle: f64) -> Vector2D {
    Vector2D::from_angle(angle - FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::callbacks::tests::RecordingWorld;
    use crate::render::HeadlessSurface;

    const STEP: Duration = Duration::from_millis(100);

    fn player() -> Player {
        Player::new(Vector2D::new(500.0, 300.0), &Assets::default())
    }

    fn input(up: bool, left: bool, right: bool, shoot: bool) -> InputState {
        InputState {
            up,
            left,
            right,
            shoot,
        }
    }

    #[test]
    fn test_starts_pointing_up() {
        let heading = player().heading();
        assert!(heading.x.abs() < 1e-9);
        assert!((heading.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_follows_input() {
        let mut world = RecordingWorld::new();
        let mut player = player();

        player.update(STEP, &input(false, false, true, false), &mut world);
        assert!((player.body().angle - 0.6).abs() < 1e-9);

        player.update(STEP, &input(false, true, false, false), &mut world);
        assert!(player.body().angle.abs() < 1e-9);
    }

    #[test]
    fn test_thrust_is_limited_to_max_speed() {
        let mut world = RecordingWorld::new();
        let mut player = player();

        for _ in 0..100 {
            player.update(STEP, &input(true, false, false, false), &mut world);
        }

        assert!(player.body().velocity.magnitude() <= PLAYER_MAX_VEL + 1e-9);
    }

    #[test]
    fn test_drag_stops_without_overshoot() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.body_mut().velocity = Vector2D::new(0.0, -50.0);

        player.update(STEP, &InputState::NONE, &mut world);
        assert!((player.body().velocity.y + 14.0).abs() < 1e-9);

        player.update(STEP, &InputState::NONE, &mut world);
        assert_eq!(player.body().velocity, Vector2D::ZERO);
    }

    #[test]
    fn test_wraps_around_edges() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.body_mut().position = Vector2D::new(1000.0 + player.body().radius() + 1.0, 300.0);

        player.update(STEP, &InputState::NONE, &mut world);

        assert_eq!(player.body().position.x, -player.body().radius());
    }

    #[test]
    fn test_shooting_respects_fire_rate() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        let shoot = input(false, false, false, true);

        player.update(STEP, &shoot, &mut world);
        player.update(STEP, &shoot, &mut world);
        assert_eq!(world.spawned.len(), 1);

        player.update(Duration::from_millis(300), &shoot, &mut world);
        assert_eq!(world.spawned.len(), 2);

        let laser = world.spawned[0].as_projectile().unwrap();
        assert_eq!(laser.faction(), Faction::Friendly);
        assert!(laser.body().position.y < 300.0);
    }

    #[test]
    fn test_hit_with_lives_left_respawns_invulnerable() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.body_mut().position = Vector2D::new(10.0, 10.0);
        player.body_mut().velocity = Vector2D::new(100.0, 0.0);

        player.on_hit(&mut world);

        assert!(!player.body().dead);
        assert!(player.is_invulnerable());
        assert_eq!(player.body().position, Vector2D::new(500.0, 300.0));
        assert_eq!(player.body().velocity, Vector2D::ZERO);
        assert_eq!(world.explosions, vec![Vector2D::new(10.0, 10.0)]);
        assert_eq!(world.lives, 2);
        assert_eq!(world.game_overs, 0);
    }

    #[test]
    fn test_cannot_shoot_while_invulnerable() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.on_hit(&mut world);

        player.update(STEP, &input(false, false, false, true), &mut world);
        assert!(world.spawned.is_empty());
    }

    #[test]
    fn test_invulnerability_wears_off_and_ship_reappears() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.on_hit(&mut world);

        let mut saw_hidden = false;
        let mut saw_shown = false;
        for _ in 0..29 {
            player.update(STEP, &InputState::NONE, &mut world);
            saw_hidden |= !player.is_visible();
            saw_shown |= player.is_visible();
        }
        assert!(player.is_invulnerable());
        assert!(saw_hidden && saw_shown);

        player.update(STEP, &InputState::NONE, &mut world);
        assert!(!player.is_invulnerable());
        assert!(player.is_visible());
    }

    #[test]
    fn test_last_life_ends_the_game() {
        let mut world = RecordingWorld::new();
        world.lives = 1;
        let mut player = player();

        player.on_hit(&mut world);

        assert!(player.body().dead);
        assert_eq!(world.game_overs, 1);
    }

    #[test]
    fn test_hidden_ship_draws_nothing() {
        let mut world = RecordingWorld::new();
        let mut player = player();
        player.on_hit(&mut world);

        let mut surface = HeadlessSurface::new();
        player.draw(&mut surface).unwrap();
        assert!(surface.calls.is_empty());
    }
}
