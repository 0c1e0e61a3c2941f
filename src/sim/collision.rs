//! Pixel-stepped collision sweep
//!
//! The player moves by walking its origin one pixel at a time through the
//! precomputed player collision map, from the current pixel toward the pixel
//! the velocity asks for. Each step is checked and resolved immediately, so
//! the box can never tunnel through geometry no matter the speed.
//!
//! The walk order interleaves x and y steps along the movement line with an
//! integer midpoint test; no divisions, no fractions. Collision responses
//! mutate velocity and motion state in place:
//!
//! - horizontal hit while flying bounces (reverse direction, half speed),
//!   otherwise it stops horizontal movement
//! - an upward hit stops vertical movement (head bump)
//! - a downward hit lands, unless the surface falls away diagonally to one
//!   side, in which case the player shifts sideways and either keeps sliding
//!   or launches off the edge with half the vertical speed turned sideways
//!
//! At the end, any axis that collided snaps to the whole pixel the walk
//! ended on; a free axis keeps its fractional position.

use crate::fixed::Fixed;
use crate::sim::state::{MotionState, Player};
use crate::sim::world::PlayerMap;

#[inline]
fn blocked(map: &PlayerMap, x: i32, y: i32) -> bool {
    map.blocked(x as usize, y as usize)
}

/// Advance the player by one tick's velocity, resolving collisions.
///
/// Coordinates handed to the map are in bounds by construction: the border
/// ring is a full tile thick, which is wider than the player box, so the
/// walk can never leave it and every `x - 1`, `x + 1`, `y + 1` probe around
/// a free cell stays inside the map.
pub fn collision_sweep(player: &mut Player, map: &PlayerMap) {
    let start_x = i32::from(player.pos.x.ifloor());
    let start_y = i32::from(player.pos.y.ifloor());
    let end_x = i32::from((player.pos.x + player.vel.x).ifloor());
    let end_y = i32::from((player.pos.y + player.vel.y).ifloor());

    // No visible movement.
    if end_x == start_x && end_y == start_y {
        return;
    }

    let mut diff_x = end_x - start_x;
    let mut diff_y = end_y - start_y;

    let mut step_x = 1;
    if diff_x < 0 {
        diff_x = -diff_x;
        step_x = -1;
    }
    let mut step_y = 1;
    if diff_y < 0 {
        diff_y = -diff_y;
        step_y = -1;
    }

    let mut collide_x = false;
    let mut collide_y = false;

    let mut x = start_x;
    let mut y = start_y;
    let mut ix = 0;
    let mut iy = 0;
    while ix < diff_x || iy < diff_y {
        // Midpoint test: step whichever axis keeps the walk closest to the
        // ideal movement line.
        if ((ix << 1) | 1) * diff_y < ((iy << 1) | 1) * diff_x {
            x += step_x;
            ix += 1;

            if blocked(map, x, y) {
                collide_x = true;
                x -= step_x;

                if player.motion == MotionState::Flying {
                    // Bounce: reverse direction at half speed and keep
                    // walking out the remaining budget.
                    step_x = -step_x;
                    player.vel.x = -player.vel.x / 2;
                } else {
                    // Stop stepping on this axis.
                    diff_x = ix;
                    player.vel.x = Fixed::ZERO;
                }
            }

            // Walked off an edge.
            if player.motion != MotionState::Flying && !blocked(map, x, y + 1) {
                player.motion = MotionState::Flying;
            }
        } else {
            y += step_y;
            iy += 1;

            if blocked(map, x, y) {
                collide_y = true;

                if step_y < 0 {
                    // Head bump: step back and stop vertical movement.
                    y += 1;
                    diff_y = iy;
                    player.vel.y = Fixed::ZERO;
                } else {
                    let was_sliding = player.motion == MotionState::Sliding;
                    player.motion = MotionState::Grounded;

                    // A downward contact lands unless the surface falls away
                    // diagonally to one side. Edges without a diagonal are
                    // only taken when already sliding.
                    if !blocked(map, x - 1, y) && (blocked(map, x - 1, y + 1) || was_sliding) {
                        // The sideways shift adjusts x, so treat it as an
                        // x-axis collision for the commit below.
                        collide_x = true;
                        x -= 1;
                        ix += 1;

                        if !blocked(map, x, y + 1) {
                            player.vel.x = -player.vel.y / 2;
                            player.motion = MotionState::Flying;
                        } else {
                            player.motion = MotionState::Sliding;
                        }
                    } else if !blocked(map, x + 1, y) && (blocked(map, x + 1, y + 1) || was_sliding)
                    {
                        collide_x = true;
                        x += 1;
                        ix += 1;

                        if !blocked(map, x, y + 1) {
                            player.vel.x = player.vel.y / 2;
                            player.motion = MotionState::Flying;
                        } else {
                            player.motion = MotionState::Sliding;
                        }
                    } else {
                        // Flat landing.
                        y -= step_y;
                        player.vel.x = Fixed::ZERO;
                        player.vel.y = Fixed::ZERO;
                        break;
                    }
                }
            }
        }
    }

    // Commit: a collided axis snaps to the pixel the walk ended on, a free
    // axis integrates the full fractional velocity.
    if collide_x {
        player.pos.x = Fixed::from_int(x as i16);
    } else {
        player.pos.x += player.vel.x;
    }
    if collide_y {
        player.pos.y = Fixed::from_int(y as i16);
    } else {
        player.pos.y += player.vel.y;
    }
}
