//! Simulation state and core types
//!
//! The session owns both bodies and the intent queue; nothing else keeps a
//! reference across ticks.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{OFFSET_NEAR, ROLL_SPEED_DIVISOR};
use crate::rotate;
use crate::tuning::Tuning;

/// Milliseconds on the host clock
pub type Timestamp = u64;

/// The player's exclusive high-level behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionKind {
    #[default]
    None,
    Kicking,
    Sliding,
}

impl ActionKind {
    /// Whether a kick or slide is in progress
    #[inline]
    pub fn is_busy(self) -> bool {
        self != ActionKind::None
    }
}

/// Held direction input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete input event, consumed by the tick it is queued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Level-triggered: queue it every tick the direction is held
    Direction(Direction),
    KickPress,
    KickRelease,
    Slide,
    CancelKickDecay,
}

/// Scheduled return to `ActionKind::None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTimeout {
    /// Action that was set when the timeout was scheduled
    pub action: ActionKind,
    pub expires_at: Timestamp,
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Radians in [0, 2π); the sprite's front is local -x
    pub rotation: f32,
    pub action: ActionKind,
    pub action_timeout: Option<ActionTimeout>,
    /// Released kick strength waiting to meet the ball
    pub kick_charge: Option<f32>,
    /// Set while the kick button is held
    pub kick_charge_started_at: Option<Timestamp>,
    /// Next time a pending charge decays
    pub next_decay_at: Option<Timestamp>,
    /// Last dribble touch
    pub last_touch: Option<Timestamp>,
    /// Distance from the near front point to the ball center, as of the last tick
    pub ball_distance: f32,
}

impl PlayerState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            action: ActionKind::None,
            action_timeout: None,
            kick_charge: None,
            kick_charge_started_at: None,
            next_decay_at: None,
            last_touch: None,
            ball_distance: f32::INFINITY,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// World position of a player-local offset
    #[inline]
    pub fn local_point(&self, offset: Vec2) -> Vec2 {
        self.position + rotate(offset, self.rotation)
    }

    /// Point the ball distance is measured from
    #[inline]
    pub fn near_point(&self) -> Vec2 {
        self.local_point(OFFSET_NEAR)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Height above the ground, never negative
    pub altitude: f32,
    /// Units per tick, positive is up
    pub vertical_speed: f32,
    /// Faces the last heading the ball rolled along
    pub rotation: f32,
    pub rolling: bool,
}

impl BallState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            altitude: 0.0,
            vertical_speed: 0.0,
            rotation: 0.0,
            rolling: false,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Sprite scale: the ball grows as it rises
    #[inline]
    pub fn scale_factor(&self, ball_scale: f32) -> f32 {
        (1.0 + self.altitude / 100.0) * ball_scale
    }

    /// Roll animation playback rate
    #[inline]
    pub fn roll_speed(&self) -> f32 {
        self.speed() / ROLL_SPEED_DIVISOR
    }
}

/// One play session: both bodies plus the pending input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub tuning: Tuning,
    pub player: PlayerState,
    pub ball: BallState,
    /// Ticks simulated so far
    pub time_ticks: u64,
    intents: VecDeque<Intent>,
}

impl Session {
    /// Player at the world center, ball a little below and to the right
    pub fn new(tuning: Tuning) -> Self {
        let center = tuning.world_size / 2.0;
        Self {
            tuning,
            player: PlayerState::new(center),
            ball: BallState::new(center + Vec2::new(50.0, 200.0)),
            time_ticks: 0,
            intents: VecDeque::new(),
        }
    }

    /// Queue an intent for the next tick
    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push_back(intent);
    }

    /// Split borrow for the tick orchestrator
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&Tuning, &mut PlayerState, &mut BallState, &mut VecDeque<Intent>) {
        (&self.tuning, &mut self.player, &mut self.ball, &mut self.intents)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_layout() {
        let session = Session::default();
        assert_eq!(session.player.position, Vec2::new(1000.0, 1000.0));
        assert_eq!(session.ball.position, Vec2::new(1050.0, 1200.0));
        assert_eq!(session.player.action, ActionKind::None);
        assert!(session.player.kick_charge.is_none());
    }

    #[test]
    fn test_intents_keep_dispatch_order() {
        let mut session = Session::default();
        session.push_intent(Intent::KickPress);
        session.push_intent(Intent::Direction(Direction::Left));
        let queued: Vec<_> = session.intents.iter().copied().collect();
        assert_eq!(queued, vec![Intent::KickPress, Intent::Direction(Direction::Left)]);
    }

    #[test]
    fn test_ball_scale_grows_with_altitude() {
        let mut ball = BallState::new(Vec2::ZERO);
        assert!((ball.scale_factor(0.35) - 0.35).abs() < 1e-6);
        ball.altitude = 100.0;
        assert!((ball.scale_factor(0.35) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_near_point_follows_rotation() {
        let mut player = PlayerState::new(Vec2::new(100.0, 100.0));
        assert!((player.near_point() - Vec2::new(85.0, 100.0)).length() < 1e-4);
        player.rotation = std::f32::consts::PI;
        assert!((player.near_point() - Vec2::new(115.0, 100.0)).length() < 1e-4);
    }
}
