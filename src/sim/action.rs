//! Player action state machine
//!
//! `None -> Kicking -> None` and `None -> Sliding -> None`. Busy states only
//! leave through their timeout, which is stored on the player and checked at
//! the start of every tick.

use super::state::{ActionKind, ActionTimeout, PlayerState, Timestamp};
use crate::consts::SLIDE_BOOST;
use crate::front_direction;
use crate::tuning::Tuning;
use crate::with_magnitude;

/// Whether direction and slide intents are accepted right now
#[inline]
pub fn accepts_movement(player: &PlayerState) -> bool {
    !player.action.is_busy()
}

/// Fire a due action timeout
///
/// The action only reverts if it is still the one the timeout was scheduled
/// for; a stale timeout just disappears. Returns the action that ended.
pub fn expire(player: &mut PlayerState, now: Timestamp) -> Option<ActionKind> {
    let timeout = player.action_timeout?;
    if now < timeout.expires_at {
        return None;
    }
    player.action_timeout = None;

    if player.action == timeout.action {
        player.action = ActionKind::None;
        log::debug!("{:?} ended at {}ms", timeout.action, now);
        Some(timeout.action)
    } else {
        None
    }
}

/// Store a released kick charge
///
/// Unlike slides and movement, charge assignment ignores the busy guard so a
/// kick can be lined up while a previous animation window runs out. A nonzero
/// charge starts the kick animation when the player is idle.
pub fn assign_charge(player: &mut PlayerState, charge: f32, now: Timestamp, tuning: &Tuning) {
    if charge == 0.0 {
        player.kick_charge = None;
        return;
    }
    player.kick_charge = Some(charge);

    if !player.action.is_busy() {
        begin(player, ActionKind::Kicking, now, tuning);
    }
}

/// Start a slide if the player is free
///
/// Launches the player along its direction of travel (or its facing when
/// standing still). Returns whether the slide started.
pub fn try_slide(player: &mut PlayerState, now: Timestamp, tuning: &Tuning) -> bool {
    if player.action.is_busy() {
        return false;
    }
    begin(player, ActionKind::Sliding, now, tuning);

    let speed = tuning.max_speed * SLIDE_BOOST;
    player.velocity = if player.velocity == glam::Vec2::ZERO {
        front_direction(player.rotation) * speed
    } else {
        with_magnitude(player.velocity, speed)
    };
    true
}

fn begin(player: &mut PlayerState, action: ActionKind, now: Timestamp, tuning: &Tuning) {
    player.action = action;
    player.action_timeout = Some(ActionTimeout {
        action,
        expires_at: now + tuning.action_duration_ms,
    });
    log::debug!("{:?} started at {}ms", action, now);
}
