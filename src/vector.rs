//! 2D vector math used for positions, velocities and headings.
//!
//! All game-space coordinates are `f64` pixels with the origin at the top-left
//! corner of the arena and the Y axis pointing down.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Unit vector pointing along `angle` (radians, 0 = +X).
    pub fn from_angle(angle: f64) -> Self {
        Vector2D::new(angle.cos(), angle.sin())
    }

    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns a unit vector with the same direction. The zero vector stays zero.
    pub fn normalize(self) -> Vector2D {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Vector2D::ZERO
        } else {
            self.scale(1.0 / magnitude)
        }
    }

    /// Caps the magnitude at `max` without changing direction.
    pub fn limit(self, max: f64) -> Vector2D {
        if self.magnitude() > max {
            self.normalize().scale(max)
        } else {
            self
        }
    }

    /// Rotates the vector so it points along `angle`, keeping its magnitude.
    ///
    /// A zero-length vector has no direction to rotate and stays zero.
    pub fn set_direction(self, angle: f64) -> Vector2D {
        let magnitude = self.magnitude();
        Vector2D::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Direction of the vector in radians, in `(-PI, PI]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(self, other: Vector2D) -> f64 {
        self.subtract(other).magnitude()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = Vector2D::add(*self, rhs);
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}
