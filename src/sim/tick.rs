//! Fixed timestep simulation tick
//!
//! One tick is: read input into velocity, apply gravity and drag, then run
//! the collision sweep. All arithmetic is fixed-point; two runs with the
//! same inputs produce the same bits.

use crate::fixed::{Fixed, Vec2Fx};
use crate::sim::collision::collision_sweep;
use crate::sim::state::{Facing, InputState, MotionState, Player};
use crate::sim::world::PlayerMap;
use crate::tuning::Tuning;

/// Advance the player by one logical tick.
pub fn tick(player: &mut Player, input: &InputState, map: &PlayerMap, tuning: &Tuning) {
    // Facing follows an exclusively held direction key and is otherwise
    // kept.
    if input.left && !input.right {
        player.facing = Facing::Left;
    } else if input.right && !input.left {
        player.facing = Facing::Right;
    }

    let dir = i32::from(input.right) - i32::from(input.left);

    if player.motion.airborne() {
        player.vel.y += tuning.gravity;
    } else {
        // Standing on the ground carries no momentum.
        player.vel = Vec2Fx::ZERO;

        if input.jump {
            // Bank charge while the jump key is held.
            player.jump_charge = (player.jump_charge + 1).min(tuning.jump_charge_max);
        } else if player.jump_charge > 0 {
            // Key released: launch. The release cost shaves the banked
            // charge before it feeds the launch formulas.
            let charge = i32::from((player.jump_charge - tuning.jump_release_cost).max(0));

            let speed = i32::from(
                (Fixed::from_int(tuning.launch_base) + tuning.launch_charge_rate * charge)
                    .ifloor(),
            );
            player.vel.x =
                (tuning.launch_x_base - tuning.launch_x_falloff * charge) * speed * dir;
            player.vel.y = -((tuning.launch_y_base + tuning.launch_y_rise * charge) * speed);

            player.motion = MotionState::Flying;
            player.jump_charge = 0;
        } else {
            player.vel.x += Fixed::from_int((dir * i32::from(tuning.walk_accel)) as i16);
        }
    }

    // Vertical drag and terminal fall speed apply in every state.
    player.vel.y =
        Fixed::from_raw(player.vel.y.raw().wrapping_mul(tuning.drag_num) / tuning.drag_den);
    if player.vel.y > tuning.max_fall_speed {
        player.vel.y = tuning.max_fall_speed;
    }

    collision_sweep(player, map);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sim::world::WorldMap;

    fn player_map(rows: &[&str]) -> PlayerMap {
        let world = WorldMap::build(&Level::parse(&rows.join("\n")).unwrap());
        PlayerMap::build(&world)
    }

    fn grounded_player(x: i16, y: i16) -> Player {
        Player {
            pos: Vec2Fx::new(Fixed::from_int(x), Fixed::from_int(y)),
            vel: Vec2Fx::ZERO,
            motion: MotionState::Grounded,
            facing: Facing::Right,
            jump_charge: 0,
        }
    }

    #[test]
    fn at_rest_stays_at_rest() {
        let map = player_map(&["bbb", "bsb", "bbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 47);
        let input = InputState::default();

        for _ in 0..100 {
            tick(&mut p, &input, &map, &tuning);
        }
        assert_eq!(p.pos.x, Fixed::from_int(40));
        assert_eq!(p.pos.y, Fixed::from_int(47));
        assert_eq!(p.vel, Vec2Fx::ZERO);
        assert_eq!(p.motion, MotionState::Grounded);
    }

    #[test]
    fn facing_follows_exclusive_direction() {
        let map = player_map(&["bbb", "bsb", "bbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 47);

        let mut input = InputState::default();
        input.left = true;
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.facing, Facing::Left);

        // Both held: facing unchanged.
        input.right = true;
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.facing, Facing::Left);

        input.left = false;
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn charge_caps_and_resets() {
        let map = player_map(&["bbb", "bsb", "bbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 47);

        let mut input = InputState::default();
        input.jump = true;
        for _ in 0..100 {
            tick(&mut p, &input, &map, &tuning);
        }
        assert_eq!(p.jump_charge, 35);
        // Holding the key keeps the player put.
        assert_eq!(p.pos.y, Fixed::from_int(47));

        input.jump = false;
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.jump_charge, 0);
        assert_eq!(p.motion, MotionState::Flying);
    }

    #[test]
    fn full_charge_release_launch_velocity() {
        // Tall shaft so the launch tick resolves without hitting anything.
        let map = player_map(&["bbb", "b b", "b b", "b b", "b b", "bsb", "bbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 175);

        let mut input = InputState::default();
        input.jump = true;
        for _ in 0..40 {
            tick(&mut p, &input, &map, &tuning);
        }
        assert_eq!(p.jump_charge, 35);

        // Release with no direction held: straight up.
        input.jump = false;
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.motion, MotionState::Flying);
        assert_eq!(p.vel.x, Fixed::ZERO);
        // Launch speed for an effective charge of 27, after one tick of
        // drag.
        assert_eq!(p.vel.y.raw(), -539_206);
        assert!(p.pos.y < Fixed::from_int(175));
    }

    #[test]
    fn directional_launch_uses_held_key() {
        let map = player_map(&["bbbb", "b  b", "b  b", "b  b", "b  b", "bs b", "bbbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 175);

        let mut input = InputState::default();
        input.jump = true;
        for _ in 0..10 {
            tick(&mut p, &input, &map, &tuning);
        }
        input.jump = false;
        input.right = true;
        tick(&mut p, &input, &map, &tuning);
        assert!(p.vel.x > Fixed::ZERO);
        assert!(p.vel.y < Fixed::ZERO);
    }

    #[test]
    fn walking_speed_is_constant() {
        let map = player_map(&["bbbb", "bs b", "bbbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 47);

        let mut input = InputState::default();
        input.right = true;
        tick(&mut p, &input, &map, &tuning);
        // Velocity is zeroed each grounded tick, so walking never
        // accelerates past one increment.
        assert_eq!(p.pos.x, Fixed::from_int(42));
        tick(&mut p, &input, &map, &tuning);
        assert_eq!(p.pos.x, Fixed::from_int(44));
    }

    #[test]
    fn fall_speed_is_clamped() {
        // Tall open shaft.
        let mut rows = vec!["bbb".to_string()];
        rows.push("bsb".to_string());
        for _ in 0..30 {
            rows.push("b b".to_string());
        }
        rows.push("bbb".to_string());
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let map = player_map(&refs);

        let tuning = Tuning::default();
        let mut p = grounded_player(40, 40);
        p.motion = MotionState::Flying;
        let input = InputState::default();

        for _ in 0..200 {
            tick(&mut p, &input, &map, &tuning);
            assert!(p.vel.y <= tuning.max_fall_speed);
            if p.motion == MotionState::Grounded {
                break;
            }
        }
        assert_eq!(p.motion, MotionState::Grounded);
    }

    #[test]
    fn drag_decays_upward_speed() {
        let map = player_map(&["bbb", "b b", "b b", "b b", "b b", "bsb", "bbb"]);
        let tuning = Tuning::default();
        let mut p = grounded_player(40, 175);
        p.motion = MotionState::Flying;
        p.vel.y = Fixed::from_raw(-400_000);
        let input = InputState::default();

        tick(&mut p, &input, &map, &tuning);
        // One tick of gravity then 99/100 drag.
        assert_eq!(p.vel.y.raw(), (-400_000 + 18_568) * 99 / 100);
    }
}
