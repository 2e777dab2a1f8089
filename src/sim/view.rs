//! Per-tick snapshot for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::state::{ActionKind, BallState, PlayerState, Session};
use crate::tuning::Tuning;

/// Which player animation to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerAnimation {
    Stand,
    Run,
    Kick,
    Slide,
}

impl PlayerAnimation {
    pub fn for_player(player: &PlayerState, tuning: &Tuning) -> Self {
        match player.action {
            ActionKind::Kicking => PlayerAnimation::Kick,
            ActionKind::Sliding => PlayerAnimation::Slide,
            ActionKind::None if player.speed() > tuning.run_speed() => PlayerAnimation::Run,
            ActionKind::None => PlayerAnimation::Stand,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub rotation: f32,
    pub action: ActionKind,
    pub animation: PlayerAnimation,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub position: Vec2,
    pub rotation: f32,
    pub altitude: f32,
    /// Sprite scale
    pub scale: f32,
    pub rolling: bool,
    /// Roll animation playback rate
    pub roll_speed: f32,
}

impl BallView {
    fn new(ball: &BallState, tuning: &Tuning) -> Self {
        Self {
            position: ball.position,
            rotation: ball.rotation,
            altitude: ball.altitude,
            scale: ball.scale_factor(tuning.ball_scale),
            rolling: ball.rolling,
            roll_speed: ball.roll_speed(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderState {
    pub tick: u64,
    pub player: PlayerView,
    pub ball: BallView,
}

impl RenderState {
    pub fn capture(session: &Session) -> Self {
        let player = &session.player;
        Self {
            tick: session.time_ticks,
            player: PlayerView {
                position: player.position,
                rotation: player.rotation,
                action: player.action,
                animation: PlayerAnimation::for_player(player, &session.tuning),
            },
            ball: BallView::new(&session.ball, &session.tuning),
        }
    }
}
