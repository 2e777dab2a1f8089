//! Kick charge tracking
//!
//! Holding kick builds strength; releasing near the ball (or just after
//! touching it) lines up a kick of that strength, releasing anywhere else
//! turns into a slide. A lined-up kick that never meets the ball decays.

use super::state::{PlayerState, Timestamp};
use crate::tuning::Tuning;

/// What a kick release turns into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Line up a kick with this strength
    Kick(f32),
    /// No kick target in reach
    Slide,
    /// Release without a matching press
    Ignored,
}

/// Start charging
pub fn press(player: &mut PlayerState, now: Timestamp) {
    player.kick_charge_started_at = Some(now);
}

/// Hold time clamped into the charge range, in ms
pub fn charge_strength(started_at: Timestamp, now: Timestamp, tuning: &Tuning) -> f32 {
    debug_assert!(now >= started_at, "kick released at {now}ms before press at {started_at}ms");
    let held = now.saturating_sub(started_at);
    held.max(tuning.kick_charge_min_ms).min(tuning.kick_charge_max_ms) as f32
}

/// Whether a release right now has something to kick
pub fn has_kick_target(player: &PlayerState, now: Timestamp, tuning: &Tuning) -> bool {
    let recently_touched = player
        .last_touch
        .is_some_and(|t| now.saturating_sub(t) < tuning.touch_grace_ms);
    recently_touched || player.ball_distance < tuning.kick_release_range
}

/// Finish charging
///
/// A kick outcome also schedules the charge decay, starting once the busy
/// window the kick has to wait out has closed. The caller applies the charge
/// (or the slide) through the action state machine.
pub fn release(player: &mut PlayerState, now: Timestamp, tuning: &Tuning) -> ReleaseOutcome {
    let Some(started_at) = player.kick_charge_started_at.take() else {
        log::debug!("Kick release at {}ms without press", now);
        return ReleaseOutcome::Ignored;
    };

    if has_kick_target(player, now, tuning) {
        let strength = charge_strength(started_at, now, tuning);
        player.next_decay_at = Some(window_end(player, now, tuning) + tuning.kick_decay_interval_ms);
        log::debug!("Kick charged to {} at {}ms", strength, now);
        ReleaseOutcome::Kick(strength)
    } else {
        ReleaseOutcome::Slide
    }
}

/// When the player can next touch the ball with a charge released at `now`
fn window_end(player: &PlayerState, now: Timestamp, tuning: &Tuning) -> Timestamp {
    match player.action_timeout {
        Some(timeout) if player.action.is_busy() => timeout.expires_at.max(now),
        _ => now + tuning.action_duration_ms,
    }
}

/// Run the decay timer if it is due
///
/// Each firing takes `kick_decay_step` off the pending charge; a charge that
/// falls under the minimum is dropped and the timer stops. Returns whether
/// anything fired.
pub fn fire_decay(player: &mut PlayerState, now: Timestamp, tuning: &Tuning) -> bool {
    let mut fired = false;

    while let Some(due) = player.next_decay_at {
        if now < due {
            break;
        }
        fired = true;

        let remaining = player.kick_charge.map(|c| c - tuning.kick_decay_step);
        match remaining {
            Some(c) if c >= tuning.kick_charge_min_ms as f32 => {
                player.kick_charge = Some(c);
                player.next_decay_at = Some(due + tuning.kick_decay_interval_ms.max(1));
            }
            _ => {
                player.kick_charge = None;
                player.next_decay_at = None;
            }
        }
        log::debug!("Kick charge decayed to {:?} at {}ms", player.kick_charge, now);
    }

    fired
}

/// Stop the decay timer
pub fn cancel_decay(player: &mut PlayerState) {
    player.next_decay_at = None;
}
