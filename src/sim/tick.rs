//! Fixed timestep simulation tick
//!
//! Order per tick: timers, intents, player movement, touch resolution, ball
//! flight. Each phase sees the results of the ones before it.

use super::ball;
use super::kick::{self, Touch};
use super::state::{ActionKind, Direction, Intent, PlayerState, Session, Timestamp};
use super::{action, charge, movement};
use crate::tuning::Tuning;

/// What happened during a tick (for sound and effect cues)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub touch: Touch,
    /// Action whose timeout ran out at the start of the tick
    pub expired: Option<ActionKind>,
    /// Whether the kick charge decayed
    pub decayed: bool,
    /// Whether a slide started
    pub slid: bool,
}

/// Advance the session by one fixed timestep
///
/// `now` is the host clock for this tick; it must not run backwards.
pub fn tick(session: &mut Session, now: Timestamp, dt: f32) -> TickReport {
    session.time_ticks += 1;
    let (tuning, player, ball, intents) = session.parts_mut();
    let mut report = TickReport::default();

    report.expired = action::expire(player, now);
    report.decayed = charge::fire_decay(player, now, tuning);

    let mut held = Vec::new();
    while let Some(intent) = intents.pop_front() {
        dispatch(player, intent, now, tuning, &mut held, &mut report);
    }

    movement::steer(player, &held, tuning);
    movement::integrate(player, tuning, dt);
    movement::turn_toward_heading(player, tuning);

    report.touch = kick::resolve(player, ball, now, tuning);
    if matches!(report.touch, Touch::Struck { .. }) {
        dispatch(player, Intent::CancelKickDecay, now, tuning, &mut held, &mut report);
    }

    ball::step(ball, tuning, dt);

    log::trace!(
        "tick {} at {}ms: player {:?} {:?}, ball {:?} alt {:.2}, {:?}",
        session.time_ticks,
        now,
        session.player.position,
        session.player.action,
        session.ball.position,
        session.ball.altitude,
        report.touch
    );
    report
}

/// Apply one intent; directions only collect into this tick's held set
fn dispatch(
    player: &mut PlayerState,
    intent: Intent,
    now: Timestamp,
    tuning: &Tuning,
    held: &mut Vec<Direction>,
    report: &mut TickReport,
) {
    match intent {
        Intent::Direction(dir) => {
            if action::accepts_movement(player) {
                held.push(dir);
            }
        }
        Intent::KickPress => charge::press(player, now),
        Intent::KickRelease => match charge::release(player, now, tuning) {
            charge::ReleaseOutcome::Kick(strength) => {
                action::assign_charge(player, strength, now, tuning);
            }
            charge::ReleaseOutcome::Slide => {
                dispatch(player, Intent::Slide, now, tuning, held, report);
            }
            charge::ReleaseOutcome::Ignored => {}
        },
        Intent::Slide => {
            report.slid |= action::try_slide(player, now, tuning);
        }
        Intent::CancelKickDecay => charge::cancel_decay(player),
    }
}
