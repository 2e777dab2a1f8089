//! Data-driven game balance
//!
//! Every tunable scalar of the simulation, loadable from a JSON file. Missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::body::BodyParams;

/// Gameplay balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World size (bodies are clamped inside [0, world_size])
    pub world_size: Vec2,

    // === Player movement ===
    pub agility: f32,
    pub max_speed: f32,
    pub drag: f32,
    pub player: BodyParams,

    // === Ball ===
    pub ball: BodyParams,
    pub gravity: f32,
    pub bounce_damping: f32,
    pub ball_scale: f32,

    // === Actions and kicks ===
    pub action_duration_ms: u64,
    pub kick_charge_min_ms: u64,
    pub kick_charge_max_ms: u64,
    pub kick_decay_interval_ms: u64,
    pub kick_decay_step: f32,
    pub kick_release_range: f32,
    pub touch_grace_ms: u64,
    pub touch_range: f32,
    pub bypass_speed_diff: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),

            agility: AGILITY,
            max_speed: MAX_SPEED,
            drag: DRAG,
            player: BodyParams {
                radius: PLAYER_RADIUS,
                mass: PLAYER_MASS,
                bounce: PLAYER_BOUNCE,
                drag: 0.0,
            },

            ball: BodyParams {
                radius: BALL_RADIUS,
                mass: BALL_MASS,
                bounce: BALL_BOUNCE,
                drag: BALL_DRAG,
            },
            gravity: GRAVITY,
            bounce_damping: BOUNCE_DAMPING,
            ball_scale: BALL_SCALE,

            action_duration_ms: ACTION_DURATION_MS,
            kick_charge_min_ms: KICK_CHARGE_MIN_MS,
            kick_charge_max_ms: KICK_CHARGE_MAX_MS,
            kick_decay_interval_ms: KICK_DECAY_INTERVAL_MS,
            kick_decay_step: KICK_DECAY_STEP,
            kick_release_range: KICK_RELEASE_RANGE,
            touch_grace_ms: TOUCH_GRACE_MS,
            touch_range: TOUCH_RANGE,
            bypass_speed_diff: BYPASS_SPEED_DIFF,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (absent fields keep their defaults)
    ///
    /// Body masses and radii that are not positive are replaced by their
    /// defaults with a warning.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        let defaults = Self::default();
        fix_body("player", &mut tuning.player, &defaults.player);
        fix_body("ball", &mut tuning.ball, &defaults.ball);
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Malformed tuning {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Speed above which the player turns toward its heading
    #[inline]
    pub fn turn_speed(&self) -> f32 {
        self.max_speed * TURN_SPEED_FRACTION
    }

    /// Speed above which the player plays its run animation
    #[inline]
    pub fn run_speed(&self) -> f32 {
        self.max_speed * RUN_SPEED_FRACTION
    }

    /// Acceleration magnitude under which a coasting player stops accelerating
    #[inline]
    pub fn accel_snap(&self) -> f32 {
        self.agility * ACCEL_SNAP_FRACTION
    }
}

fn fix_body(name: &str, body: &mut BodyParams, default: &BodyParams) {
    // NaN fails the comparison too
    if !(body.mass > 0.0 && body.mass.is_finite()) {
        log::warn!("Invalid {} mass {}; using {}", name, body.mass, default.mass);
        body.mass = default.mass;
    }
    if !(body.radius > 0.0 && body.radius.is_finite()) {
        log::warn!("Invalid {} radius {}; using {}", name, body.radius, default.radius);
        body.radius = default.radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "agility": 900.0, "touch_range": 25.0 }"#).unwrap();
        assert_eq!(tuning.agility, 900.0);
        assert_eq!(tuning.touch_range, 25.0);
        assert_eq!(tuning.max_speed, MAX_SPEED);
        assert_eq!(tuning.ball, Tuning::default().ball);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ agility: fast }").is_err());
    }

    #[test]
    fn test_non_positive_mass_uses_default() {
        let tuning = Tuning::from_json(
            r#"{ "ball": { "radius": 12.0, "mass": 0.0, "bounce": 0.8, "drag": 50.0 },
                 "player": { "radius": -1.0, "mass": -70.0, "bounce": 0.0, "drag": 0.0 } }"#,
        )
        .unwrap();
        assert_eq!(tuning.ball.mass, BALL_MASS);
        assert_eq!(tuning.ball.radius, 12.0);
        assert_eq!(tuning.ball.bounce, 0.8);
        assert_eq!(tuning.player.mass, PLAYER_MASS);
        assert_eq!(tuning.player.radius, PLAYER_RADIUS);

        // The fixed-up bodies collide without producing NaN
        let mut a_pos = Vec2::ZERO;
        let mut a_vel = Vec2::new(50.0, 0.0);
        let mut b_pos = Vec2::new(10.0, 0.0);
        let mut b_vel = Vec2::ZERO;
        crate::sim::collide_bodies(
            &mut a_pos,
            &mut a_vel,
            &tuning.player,
            &mut b_pos,
            &mut b_vel,
            &tuning.ball,
        );
        assert!(a_pos.is_finite() && b_pos.is_finite());
        assert!(a_vel.is_finite() && b_vel.is_finite());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/nonexistent/kickabout/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&Tuning::default()).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }
}
