//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Time comes from the caller, timers are plain timestamps on the state
//! - No rendering or platform dependencies

pub mod action;
pub mod ball;
pub mod body;
pub mod charge;
pub mod collision;
pub mod kick;
pub mod movement;
pub mod state;
pub mod tick;
pub mod view;

pub use body::BodyParams;
pub use collision::{CollisionResult, circle_circle, collide_bodies};
pub use kick::Touch;
pub use state::{
    ActionKind, ActionTimeout, BallState, Direction, Intent, PlayerState, Session, Timestamp,
};
pub use tick::{TickReport, tick};
pub use view::{BallView, PlayerAnimation, PlayerView, RenderState};
