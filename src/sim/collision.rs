//! Collision detection and response for circular bodies
//!
//! Only two shapes exist: the player and ball circles, and the rectangular
//! world they are clamped inside.

use glam::Vec2;

use super::body::BodyParams;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact normal, pointing from the first body toward the second
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Center-to-center distance between two bodies
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Check overlap between two circles
pub fn circle_circle(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> CollisionResult {
    let delta = b_pos - a_pos;
    let dist = delta.length();
    let reach = a_radius + b_radius;

    if dist >= reach {
        return CollisionResult::miss();
    }

    // Coincident centers: pick an arbitrary but stable axis
    let normal = if dist > 1e-6 { delta / dist } else { Vec2::X };
    CollisionResult {
        hit: true,
        normal,
        penetration: reach - dist,
    }
}

/// Solid-body response between two overlapping circles
///
/// Pushes the bodies apart in inverse proportion to their mass, then exchanges
/// momentum along the contact normal if they are closing.
pub fn collide_bodies(
    a_pos: &mut Vec2,
    a_vel: &mut Vec2,
    a: &BodyParams,
    b_pos: &mut Vec2,
    b_vel: &mut Vec2,
    b: &BodyParams,
) -> CollisionResult {
    let result = circle_circle(*a_pos, a.radius, *b_pos, b.radius);
    if !result.hit {
        return result;
    }

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_total = inv_a + inv_b;

    *a_pos -= result.normal * result.penetration * (inv_a / inv_total);
    *b_pos += result.normal * result.penetration * (inv_b / inv_total);

    let closing = (*b_vel - *a_vel).dot(result.normal);
    if closing < 0.0 {
        let restitution = a.bounce.max(b.bounce);
        let impulse = -(1.0 + restitution) * closing / inv_total;
        *a_vel -= result.normal * impulse * inv_a;
        *b_vel += result.normal * impulse * inv_b;
    }

    result
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Keep a circle inside [0, world], bouncing it off any bound it touches
pub fn clamp_to_world(position: &mut Vec2, velocity: &mut Vec2, radius: f32, bounce: f32, world: Vec2) {
    let min = Vec2::splat(radius);
    let max = (world - Vec2::splat(radius)).max(min);

    for (normal, outside) in [
        (Vec2::X, position.x < min.x),
        (Vec2::NEG_X, position.x > max.x),
        (Vec2::Y, position.y < min.y),
        (Vec2::NEG_Y, position.y > max.y),
    ] {
        // Only reflect velocity heading into the bound
        if outside && velocity.dot(normal) < 0.0 {
            let reflected = reflect_velocity(*velocity, normal);
            let along = reflected.dot(normal) * bounce;
            *velocity = reflected - reflected.dot(normal) * normal + along * normal;
        }
    }

    *position = position.clamp(min, max);
}
