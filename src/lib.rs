//! Kickabout - a top-down arcade football kickabout
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, actions, kicks, ball flight)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz; the per-tick constants below assume it)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 2000.0;
    pub const WORLD_HEIGHT: f32 = 2000.0;

    /// Player acceleration while a direction is held (units/s²)
    pub const AGILITY: f32 = 700.0;
    /// Player speed cap (units/s)
    pub const MAX_SPEED: f32 = 200.0;
    /// Fraction of player velocity lost every tick
    pub const DRAG: f32 = 0.05;
    /// Released acceleration shrinks by this factor per tick...
    pub const ACCEL_DECAY: f32 = 0.9;
    /// ...until it drops under AGILITY * ACCEL_SNAP_FRACTION, then snaps to zero
    pub const ACCEL_SNAP_FRACTION: f32 = 1.0 / 100.0;
    /// Player only turns when moving faster than MAX_SPEED * TURN_SPEED_FRACTION
    pub const TURN_SPEED_FRACTION: f32 = 1.0 / 40.0;
    /// Max turn per tick (radians)
    pub const MAX_TURN: f32 = 0.2;
    /// Run animation above MAX_SPEED * RUN_SPEED_FRACTION
    pub const RUN_SPEED_FRACTION: f32 = 1.0 / 10.0;
    /// Slide launches the player at MAX_SPEED * SLIDE_BOOST
    pub const SLIDE_BOOST: f32 = 1.25;

    /// Player body
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_MASS: f32 = 70.0;
    pub const PLAYER_BOUNCE: f32 = 0.01;

    /// Ball body
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MASS: f32 = 40.0;
    pub const BALL_BOUNCE: f32 = 1.0;
    /// Linear rolling resistance on the ball (units/s²)
    pub const BALL_DRAG: f32 = 75.0;
    /// Base sprite scale of the ball at ground level
    pub const BALL_SCALE: f32 = 0.35;
    /// Vertical speed lost per tick (units/tick²)
    pub const GRAVITY: f32 = 0.15;
    /// Vertical speed kept (and inverted) on each ground bounce
    pub const BOUNCE_DAMPING: f32 = 0.5;
    /// Ball rolls (and turns to its heading) above this speed
    pub const ROLL_SPEED_THRESHOLD: f32 = 5.0;
    /// Roll animation rate is ball speed divided by this
    pub const ROLL_SPEED_DIVISOR: f32 = 5.0;

    /// Kick/slide animation window (ms)
    pub const ACTION_DURATION_MS: u64 = 1000;
    /// Kick charge clamp (ms of hold, also the kick strength)
    pub const KICK_CHARGE_MIN_MS: u64 = 500;
    pub const KICK_CHARGE_MAX_MS: u64 = 1500;
    /// A pending charge decays this often (ms)...
    pub const KICK_DECAY_INTERVAL_MS: u64 = 1000;
    /// ...losing this much strength each time
    pub const KICK_DECAY_STEP: f32 = 100.0;
    /// Releasing within this distance of the ball kicks instead of sliding
    pub const KICK_RELEASE_RANGE: f32 = 40.0;
    /// Releasing this soon after a touch kicks instead of sliding (ms)
    pub const TOUCH_GRACE_MS: u64 = 1000;

    /// Ball closer than this to the player's front point is touched
    pub const TOUCH_RANGE: f32 = 20.0;
    /// Ball closer than this gets no minimum dribble push
    pub const CLOSE_TOUCH_RANGE: f32 = 5.0;
    /// Minimum dribble push speed
    pub const DRIBBLE_MIN_KICK: f32 = 25.0;
    /// Dribble push gain over (player speed + ball distance)
    pub const DRIBBLE_GAIN: f32 = 1.05;
    /// Closing speed above which touches become plain collisions
    pub const BYPASS_SPEED_DIFF: f32 = 300.0;

    /// Player-local point the ball distance is measured from
    pub const OFFSET_NEAR: Vec2 = Vec2::new(-15.0, 0.0);
    /// Player-local point a dribble pushes the ball toward
    pub const OFFSET_FAR: Vec2 = Vec2::new(-40.0, 0.0);
}

/// Wrap angle to [-π, π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let normalized = angle.rem_euclid(TAU);
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Rotate a vector counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Rescale a vector to `magnitude`, keeping its direction (zero stays zero)
#[inline]
pub fn with_magnitude(v: Vec2, magnitude: f32) -> Vec2 {
    v.normalize_or_zero() * magnitude
}

/// Rotation that points a sprite's front (local -x) along `v`
#[inline]
pub fn facing_angle(v: Vec2) -> f32 {
    (-v.y).atan2(-v.x)
}

/// Unit vector out of a sprite's front for the given rotation
#[inline]
pub fn front_direction(rotation: f32) -> Vec2 {
    rotate(Vec2::NEG_X, rotation)
}
