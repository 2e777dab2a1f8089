//! Player/ball touch resolution
//!
//! Runs after the player moves and before the ball flies. A touch is either a
//! charged strike, a dribble nudge toward a point ahead of the player, or (at
//! high closing speed or mid-animation) a plain solid-body collision.

use serde::{Deserialize, Serialize};

use super::collision::{collide_bodies, distance};
use super::state::{BallState, PlayerState, Timestamp};
use crate::consts::{CLOSE_TOUCH_RANGE, DRIBBLE_GAIN, DRIBBLE_MIN_KICK, OFFSET_FAR};
use crate::tuning::Tuning;
use crate::{front_direction, with_magnitude};

/// How the player and ball interacted this tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Touch {
    #[default]
    None,
    /// Bodies bounced off each other
    Collided,
    /// Ball pushed along ahead of the player
    Dribbled { speed: f32 },
    /// Charged kick delivered
    Struck { strength: f32 },
}

/// Resolve this tick's touch, updating `player.ball_distance` first
pub fn resolve(player: &mut PlayerState, ball: &mut BallState, now: Timestamp, tuning: &Tuning) -> Touch {
    player.ball_distance = distance(player.near_point(), ball.position);
    let speed_diff = (player.velocity - ball.velocity).length();

    if speed_diff > tuning.bypass_speed_diff || player.action.is_busy() {
        let hit = collide_bodies(
            &mut player.position,
            &mut player.velocity,
            &tuning.player,
            &mut ball.position,
            &mut ball.velocity,
            &tuning.ball,
        );
        return if hit.hit { Touch::Collided } else { Touch::None };
    }

    if player.ball_distance >= tuning.touch_range {
        return Touch::None;
    }

    match player.kick_charge {
        Some(strength) if strength != 0.0 => strike(player, ball, strength),
        _ => dribble(player, ball, now),
    }
}

/// Fire the pending charge along the player's acceleration, chipping the ball up
fn strike(player: &mut PlayerState, ball: &mut BallState, strength: f32) -> Touch {
    // A coasting player kicks the way they face
    let direction = if player.acceleration == glam::Vec2::ZERO {
        front_direction(player.rotation)
    } else {
        player.acceleration
    };
    ball.velocity = with_magnitude(direction, strength);
    ball.vertical_speed = strength / 2.0;
    player.kick_charge = None;
    log::debug!("Ball struck with strength {}", strength);
    Touch::Struck { strength }
}

/// Nudge the ball toward a point ahead of the player
fn dribble(player: &mut PlayerState, ball: &mut BallState, now: Timestamp) -> Touch {
    let target = player.local_point(OFFSET_FAR);
    let min_kick = if player.ball_distance < CLOSE_TOUCH_RANGE {
        0.0
    } else {
        DRIBBLE_MIN_KICK
    };
    let speed = ((player.speed() + player.ball_distance) * DRIBBLE_GAIN).max(min_kick);
    ball.velocity = with_magnitude(target - ball.position, speed);
    player.last_touch = Some(now);
    Touch::Dribbled { speed }
}
