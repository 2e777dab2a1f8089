//! Arcade body integration
//!
//! Stands in for the host physics engine: velocity from acceleration, linear
//! drag on coasting axes, speed cap, position, and world-bounds clamping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-body physics configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub radius: f32,
    pub mass: f32,
    /// Restitution against world bounds and other bodies
    pub bounce: f32,
    /// Linear deceleration applied to axes without acceleration (units/s²)
    pub drag: f32,
}

/// Integrate acceleration into velocity, then apply drag and the speed cap
pub fn accelerate(
    velocity: &mut Vec2,
    acceleration: Vec2,
    params: &BodyParams,
    max_speed: Option<f32>,
    dt: f32,
) {
    *velocity += acceleration * dt;

    if params.drag > 0.0 {
        let step = params.drag * dt;
        if acceleration.x == 0.0 {
            velocity.x = drag_axis(velocity.x, step);
        }
        if acceleration.y == 0.0 {
            velocity.y = drag_axis(velocity.y, step);
        }
    }

    if let Some(max_speed) = max_speed {
        *velocity = velocity.clamp_length_max(max_speed);
    }
}

/// Move toward zero by `step` without crossing it
#[inline]
fn drag_axis(v: f32, step: f32) -> f32 {
    if v > step {
        v - step
    } else if v < -step {
        v + step
    } else {
        0.0
    }
}

/// Integrate velocity into position and keep the body inside the world
pub fn advance(position: &mut Vec2, velocity: &mut Vec2, params: &BodyParams, world: Vec2, dt: f32) {
    *position += *velocity * dt;
    super::collision::clamp_to_world(position, velocity, params.radius, params.bounce, world);
}
