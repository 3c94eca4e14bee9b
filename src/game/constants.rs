// Gameplay tunables that are not exposed through `GameConfig`.
//
// Speeds are in pixels per second, accelerations in pixels per second squared,
// angles in radians. The classic per-frame values were tuned at 60 Hz.

use std::f64::consts::PI;
use std::time::Duration;

pub const TICKS_PER_SECOND: f64 = 60.0;

/// One nominal frame at 60 Hz.
pub const FRAME_TIME: Duration = Duration::from_nanos(16_666_667);

// Player
pub const PLAYER_MAX_VEL: f64 = 420.0;
pub const PLAYER_ACCELERATION: f64 = 720.0;
pub const PLAYER_TURN_RATE: f64 = 6.0;
pub const FIRE_RATE: Duration = Duration::from_millis(300);
pub const SPAWNING_TIME: Duration = Duration::from_millis(3000);
pub const FLICKER_TIME: Duration = Duration::from_millis(200);

// Projectiles
pub const LASER_VEL: f64 = 900.0;
pub const LASER_LIFESPAN: Duration = Duration::from_millis(2000);

// Meteors
pub const METEOR_SCORE: u32 = 20;
pub const METEOR_SPIN: f64 = PI / 2.0;

// Ufo
pub const UFO_MAX_VEL: f64 = 180.0;
pub const UFO_MASS: f64 = 60.0;
pub const NODE_RADIUS: f64 = 160.0;
pub const UFO_FIRE_RATE: Duration = Duration::from_millis(1000);
pub const UFO_ANGLE_RANGE: f64 = PI / 2.0;
pub const UFO_SCORE: u32 = 40;

// HUD
pub const SCORE_HUD_OFFSET: f64 = 150.0;
pub const HUD_MARGIN: f64 = 25.0;
pub const DIGIT_PITCH: f64 = 20.0;

/// Converts a frame delta into a count of nominal 60 Hz frames.
pub fn frames_in(dt: Duration) -> f64 {
    dt.as_secs_f64() * TICKS_PER_SECOND
}
