//! Ball flight: rolling across the ground and bouncing up off it

use super::body;
use super::state::BallState;
use crate::consts::ROLL_SPEED_THRESHOLD;
use crate::facing_angle;
use crate::tuning::Tuning;

/// Advance the ball one tick
pub fn step(ball: &mut BallState, tuning: &Tuning, dt: f32) {
    roll(ball, tuning, dt);
    apply_gravity(ball, tuning.gravity);
    ground_bounce(ball, tuning.bounce_damping);
    update_roll(ball);
}

/// Horizontal motion: rolling resistance and world bounds
pub fn roll(ball: &mut BallState, tuning: &Tuning, dt: f32) {
    body::accelerate(&mut ball.velocity, glam::Vec2::ZERO, &tuning.ball, None, dt);
    body::advance(
        &mut ball.position,
        &mut ball.velocity,
        &tuning.ball,
        tuning.world_size,
        dt,
    );
}

#[inline]
pub fn apply_gravity(ball: &mut BallState, gravity: f32) {
    ball.vertical_speed -= gravity;
    ball.altitude += ball.vertical_speed;
}

/// Clamp a ball below ground back to it, inverting and damping its fall
pub fn ground_bounce(ball: &mut BallState, damping: f32) {
    if ball.altitude < 0.0 {
        ball.altitude = 0.0;
        ball.vertical_speed = -damping * ball.vertical_speed;
    }
}

/// Rolling balls face their heading; slow ones stop animating
pub fn update_roll(ball: &mut BallState) {
    ball.rolling = ball.speed() > ROLL_SPEED_THRESHOLD;
    if ball.rolling {
        ball.rotation = facing_angle(ball.velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;

    fn ball_at_rest() -> BallState {
        BallState::new(Vec2::splat(500.0))
    }

    #[test]
    fn test_ground_bounce_inverts_and_halves() {
        let mut ball = ball_at_rest();
        ball.altitude = -3.0;
        ball.vertical_speed = -2.0;
        ground_bounce(&mut ball, 0.5);
        assert_eq!(ball.altitude, 0.0);
        assert_eq!(ball.vertical_speed, 1.0);
    }

    #[test]
    fn test_airborne_ball_is_untouched_by_bounce() {
        let mut ball = ball_at_rest();
        ball.altitude = 12.0;
        ball.vertical_speed = -2.0;
        ground_bounce(&mut ball, 0.5);
        assert_eq!(ball.altitude, 12.0);
        assert_eq!(ball.vertical_speed, -2.0);
    }

    #[test]
    fn test_resting_ball_is_not_idempotent() {
        // Gravity pulls a grounded ball under, so it always picks up a bounce
        let tuning = Tuning::default();
        let mut ball = ball_at_rest();
        apply_gravity(&mut ball, tuning.gravity);
        assert!(ball.altitude < 0.0);
        ground_bounce(&mut ball, tuning.bounce_damping);
        assert_eq!(ball.altitude, 0.0);
        assert!((ball.vertical_speed - 0.075).abs() < 1e-6);
        assert_ne!(ball, ball_at_rest());
    }

    #[test]
    fn test_altitude_never_negative() {
        let tuning = Tuning::default();
        let mut ball = ball_at_rest();
        ball.vertical_speed = 400.0;
        for _ in 0..20_000 {
            step(&mut ball, &tuning, SIM_DT);
            assert!(ball.altitude >= 0.0);
        }
        assert!(ball.altitude < 1.0);
    }

    #[test]
    fn test_roll_state_follows_speed() {
        let tuning = Tuning::default();
        let mut ball = ball_at_rest();
        ball.velocity = Vec2::new(0.0, 300.0);
        step(&mut ball, &tuning, SIM_DT);
        assert!(ball.rolling);
        assert!((crate::front_direction(ball.rotation) - Vec2::Y).length() < 1e-4);

        let heading = ball.rotation;
        ball.velocity = Vec2::new(3.0, 0.0);
        update_roll(&mut ball);
        assert!(!ball.rolling);
        assert_eq!(ball.rotation, heading);
    }

    #[test]
    fn test_rolling_resistance_stops_ball() {
        let tuning = Tuning::default();
        let mut ball = ball_at_rest();
        ball.velocity = Vec2::new(150.0, 0.0);
        // 150 units/s at 75 units/s² stops within two seconds
        for _ in 0..121 {
            step(&mut ball, &tuning, SIM_DT);
        }
        assert_eq!(ball.velocity, Vec2::ZERO);
        assert!(ball.position.x > 500.0);
    }
}
