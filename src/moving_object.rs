//! The moving objects of the arena and the state they share.
//!
//! Every moving object embeds a [`Body`] (center, velocity, sprite, collision
//! radius) and is stored in the world as one variant of [`MovingObject`].
//! The world dispatches update, draw and hit handling through the enum, so
//! adding a new kind of object is a compile error everywhere it isn't handled.

use crate::assets::{Assets, SpriteId, SpriteSize};
use crate::collision::Collidable;
use crate::game::callbacks::WorldCallbacks;
use crate::game::types::Arena;
use crate::input_system::InputState;
use crate::meteor::Meteor;
use crate::player::Player;
use crate::projectile::{Faction, Projectile};
use crate::render::{Drawable, Surface};
use crate::ufo::Ufo;
use crate::vector::Vector2D;
use std::time::Duration;

/// Position, motion and appearance shared by every moving object.
#[derive(Debug, Clone)]
pub struct Body {
    /// Center of the object.
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub max_speed: f64,
    pub sprite: SpriteId,
    pub size: SpriteSize,
    /// Sprite rotation in radians.
    pub angle: f64,
    pub dead: bool,
}

impl Body {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        max_speed: f64,
        sprite: SpriteId,
        assets: &Assets,
    ) -> Self {
        Body {
            position,
            velocity,
            max_speed,
            sprite,
            size: assets.size(sprite),
            angle: 0.0,
            dead: false,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size.radius()
    }

    /// Moves the body along its velocity for `dt`.
    pub fn integrate(&mut self, dt: Duration) {
        self.position += self.velocity.scale(dt.as_secs_f64());
    }

    /// Once the body has fully left one edge, brings it back on the opposite one.
    pub fn wrap(&mut self, arena: Arena) {
        let r = self.radius();

        if self.position.x > arena.width + r {
            self.position.set_x(-r);
        } else if self.position.x < -r {
            self.position.set_x(arena.width + r);
        }

        if self.position.y > arena.height + r {
            self.position.set_y(-r);
        } else if self.position.y < -r {
            self.position.set_y(arena.height + r);
        }
    }

    /// True when the body is entirely outside the arena.
    pub fn is_off_screen(&self, arena: Arena) -> bool {
        let r = self.radius();
        self.position.x < -r
            || self.position.x > arena.width + r
            || self.position.y < -r
            || self.position.y > arena.height + r
    }

    /// Draws the sprite centered on the body position.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.draw_sprite(
            self.sprite,
            self.position.x - f64::from(self.size.width) / 2.0,
            self.position.y - f64::from(self.size.height) / 2.0,
            self.angle,
        )
    }
}

#[derive(Debug, Clone)]
pub enum MovingObject {
    Player(Player),
    Meteor(Meteor),
    Ufo(Ufo),
    Projectile(Projectile),
}

impl MovingObject {
    pub fn update(&mut self, dt: Duration, input: &InputState, world: &mut dyn WorldCallbacks) {
        match self {
            MovingObject::Player(player) => player.update(dt, input, world),
            MovingObject::Meteor(meteor) => meteor.update(dt, world),
            MovingObject::Ufo(ufo) => ufo.update(dt, world),
            MovingObject::Projectile(projectile) => projectile.update(dt, world),
        }
    }

    /// Applies this object's response to being hit.
    pub fn on_hit(&mut self, world: &mut dyn WorldCallbacks) {
        match self {
            MovingObject::Player(player) => player.on_hit(world),
            MovingObject::Meteor(meteor) => meteor.on_hit(world),
            MovingObject::Ufo(ufo) => ufo.on_hit(world),
            MovingObject::Projectile(projectile) => projectile.on_hit(),
        }
    }

    /// Decides whether two overlapping objects should hit each other.
    pub fn can_collide_with(&self, other: &MovingObject) -> bool {
        if self.is_dead() || other.is_dead() {
            return false;
        }

        match (self, other) {
            (MovingObject::Player(p), _) | (_, MovingObject::Player(p)) if p.is_invulnerable() => {
                false
            }
            (MovingObject::Meteor(_), MovingObject::Meteor(_)) => false,
            (MovingObject::Projectile(_), MovingObject::Projectile(_)) => false,
            (MovingObject::Projectile(p), MovingObject::Player(_))
            | (MovingObject::Player(_), MovingObject::Projectile(p)) => {
                p.faction() == Faction::Hostile
            }
            (MovingObject::Projectile(p), MovingObject::Ufo(_))
            | (MovingObject::Ufo(_), MovingObject::Projectile(p)) => {
                p.faction() == Faction::Friendly
            }
            _ => true,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            MovingObject::Player(player) => player.body(),
            MovingObject::Meteor(meteor) => meteor.body(),
            MovingObject::Ufo(ufo) => ufo.body(),
            MovingObject::Projectile(projectile) => projectile.body(),
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            MovingObject::Player(player) => player.body_mut(),
            MovingObject::Meteor(meteor) => meteor.body_mut(),
            MovingObject::Ufo(ufo) => ufo.body_mut(),
            MovingObject::Projectile(projectile) => projectile.body_mut(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.body().dead
    }

    /// Marks the object for removal without triggering any hit response.
    pub fn destroy(&mut self) {
        self.body_mut().dead = true;
    }

    pub fn position(&self) -> Vector2D {
        self.body().position
    }

    pub fn as_meteor(&self) -> Option<&Meteor> {
        match self {
            MovingObject::Meteor(meteor) => Some(meteor),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            MovingObject::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_ufo(&self) -> Option<&Ufo> {
        match self {
            MovingObject::Ufo(ufo) => Some(ufo),
            _ => None,
        }
    }

    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            MovingObject::Projectile(projectile) => Some(projectile),
            _ => None,
        }
    }
}

impl Collidable for MovingObject {
    fn center(&self) -> Vector2D {
        self.body().position
    }

    fn radius(&self) -> f64 {
        self.body().radius()
    }
}

impl Drawable for MovingObject {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if self.is_dead() {
            return Ok(());
        }

        match self {
            MovingObject::Player(player) => player.draw(surface),
            _ => self.body().draw(surface),
        }
    }
}
