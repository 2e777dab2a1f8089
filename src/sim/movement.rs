//! Player movement: steering, drag, speed cap, and turning
//!
//! Held directions set acceleration axes outright; released axes coast down
//! geometrically. The player turns toward its velocity heading at a capped
//! rate instead of snapping.

use glam::Vec2;

use super::body;
use super::state::{Direction, PlayerState};
use crate::consts::{ACCEL_DECAY, MAX_TURN};
use crate::tuning::Tuning;
use crate::{facing_angle, normalize_angle, wrap_angle};

/// Update acceleration from the directions held this tick
///
/// With nothing held the whole vector decays by `ACCEL_DECAY`, snapping to
/// zero once it is small. Axes no held direction touches decay the same way
/// while the others are set to ±agility. The result never exceeds agility.
pub fn steer(player: &mut PlayerState, held: &[Direction], tuning: &Tuning) {
    let snap = tuning.accel_snap();

    if held.is_empty() {
        let accel = player.acceleration.length();
        player.acceleration = if accel > snap {
            player.acceleration * ACCEL_DECAY
        } else {
            Vec2::ZERO
        };
        return;
    }

    let mut accel = player.acceleration;
    let (mut x_held, mut y_held) = (false, false);
    // Later intents win when opposing directions arrive in one tick
    for dir in held {
        match dir {
            Direction::Up => {
                accel.y = -tuning.agility;
                y_held = true;
            }
            Direction::Down => {
                accel.y = tuning.agility;
                y_held = true;
            }
            Direction::Left => {
                accel.x = -tuning.agility;
                x_held = true;
            }
            Direction::Right => {
                accel.x = tuning.agility;
                x_held = true;
            }
        }
    }
    if !x_held {
        accel.x = coast_axis(accel.x, snap);
    }
    if !y_held {
        accel.y = coast_axis(accel.y, snap);
    }

    player.acceleration = accel.clamp_length_max(tuning.agility);
}

#[inline]
fn coast_axis(a: f32, snap: f32) -> f32 {
    if a.abs() > snap { a * ACCEL_DECAY } else { 0.0 }
}

/// Integrate the player body for one tick
///
/// The speed cap applies before the per-tick drag, so the player always
/// leaves this below `max_speed`.
pub fn integrate(player: &mut PlayerState, tuning: &Tuning, dt: f32) {
    body::accelerate(
        &mut player.velocity,
        player.acceleration,
        &tuning.player,
        Some(tuning.max_speed),
        dt,
    );
    player.velocity *= 1.0 - tuning.drag;
    body::advance(
        &mut player.position,
        &mut player.velocity,
        &tuning.player,
        tuning.world_size,
        dt,
    );
}

/// Turn toward the velocity heading by at most `MAX_TURN`
pub fn turn_toward_heading(player: &mut PlayerState, tuning: &Tuning) {
    if player.speed() <= tuning.turn_speed() {
        return;
    }
    let ideal = wrap_angle(facing_angle(player.velocity) - player.rotation);
    let turn = ideal.clamp(-MAX_TURN, MAX_TURN);
    player.rotation = normalize_angle(player.rotation + turn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn direction(code: u8) -> Direction {
        match code % 4 {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }

    #[test]
    fn test_held_direction_sets_axis() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(Vec2::splat(1000.0));
        steer(&mut player, &[Direction::Up], &tuning);
        assert_eq!(player.acceleration, Vec2::new(0.0, -700.0));
        steer(&mut player, &[Direction::Left, Direction::Right], &tuning);
        // Right wins; the released vertical axis coasts before the cap rescales
        let expected = Vec2::new(700.0, -630.0).clamp_length_max(700.0);
        assert!((player.acceleration - expected).length() < 1e-3);
    }

    #[test]
    fn test_release_decays_then_snaps() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(Vec2::splat(1000.0));
        player.acceleration = Vec2::new(300.0, 400.0);

        steer(&mut player, &[], &tuning);
        assert!((player.acceleration.length() - 450.0).abs() < 1e-3);

        player.acceleration = Vec2::new(7.5, 0.0);
        steer(&mut player, &[], &tuning);
        assert!((player.acceleration.x - 6.75).abs() < 1e-5);
        steer(&mut player, &[], &tuning);
        assert_eq!(player.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_turn_is_capped_per_tick() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(Vec2::splat(1000.0));
        player.velocity = Vec2::new(0.0, -100.0); // heading angle π/2
        turn_toward_heading(&mut player, &tuning);
        assert!((player.rotation - MAX_TURN).abs() < 1e-5);
    }

    #[test]
    fn test_slow_player_keeps_rotation() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(Vec2::splat(1000.0));
        player.rotation = 1.0;
        player.velocity = Vec2::new(0.0, 4.0);
        turn_toward_heading(&mut player, &tuning);
        assert_eq!(player.rotation, 1.0);
    }

    #[test]
    fn test_turn_settles_on_heading() {
        let tuning = Tuning::default();
        let mut player = PlayerState::new(Vec2::splat(1000.0));
        player.velocity = Vec2::new(0.0, 150.0);
        for _ in 0..40 {
            turn_toward_heading(&mut player, &tuning);
        }
        let front = crate::front_direction(player.rotation);
        assert!((front - Vec2::Y).length() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_acceleration_never_exceeds_agility(
            ticks in proptest::collection::vec(proptest::collection::vec(0u8..4, 0..5), 1..60)
        ) {
            let tuning = Tuning::default();
            let mut player = PlayerState::new(Vec2::splat(1000.0));
            for codes in ticks {
                let held: Vec<_> = codes.into_iter().map(direction).collect();
                steer(&mut player, &held, &tuning);
                prop_assert!(player.acceleration.length() <= tuning.agility + 1e-3);
            }
        }

        #[test]
        fn prop_coasting_decays_by_exact_factor(x in -700.0f32..700.0, y in -700.0f32..700.0) {
            let tuning = Tuning::default();
            let mut player = PlayerState::new(Vec2::splat(1000.0));
            player.acceleration = Vec2::new(x, y);
            let before = player.acceleration.length();
            steer(&mut player, &[], &tuning);
            let after = player.acceleration.length();
            if before > tuning.accel_snap() {
                prop_assert!((after - before * ACCEL_DECAY).abs() < 1e-3);
            } else {
                prop_assert_eq!(after, 0.0);
            }
        }

        #[test]
        fn prop_speed_capped_after_drag(
            vx in -1000.0f32..1000.0,
            vy in -1000.0f32..1000.0,
            codes in proptest::collection::vec(0u8..4, 0..4),
        ) {
            let tuning = Tuning::default();
            let mut player = PlayerState::new(Vec2::splat(1000.0));
            player.velocity = Vec2::new(vx, vy);
            let held: Vec<_> = codes.into_iter().map(direction).collect();
            steer(&mut player, &held, &tuning);
            integrate(&mut player, &tuning, SIM_DT);
            prop_assert!(player.speed() <= tuning.max_speed + 1e-3);
        }

        #[test]
        fn prop_rotation_stays_normalized(rotation in -20.0f32..20.0, vx in -200.0f32..200.0, vy in -200.0f32..200.0) {
            let tuning = Tuning::default();
            let mut player = PlayerState::new(Vec2::splat(1000.0));
            player.rotation = normalize_angle(rotation);
            player.velocity = Vec2::new(vx, vy);
            turn_toward_heading(&mut player, &tuning);
            prop_assert!((0.0..std::f32::consts::TAU).contains(&player.rotation));
        }
    }
}
