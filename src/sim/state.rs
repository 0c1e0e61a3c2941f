//! Player, camera and input state
//!
//! All mutable simulation state lives in these few structs; the maps and
//! textures around them are immutable after init.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, VIEW_HEIGHT, VIEW_WIDTH};
use crate::fixed::{Fixed, Vec2Fx};
use crate::level::Level;

/// How the player currently relates to the ground.
///
/// Exactly one of these holds at a time. `Sliding` is airborne for gravity
/// purposes but remembers that the player is skimming down a ramp, which
/// changes how the next downward contact resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Standing on solid ground. Velocity is zeroed every tick.
    Grounded,
    /// Airborne under gravity.
    Flying,
    /// Skimming down a ramp edge.
    Sliding,
}

impl MotionState {
    /// Gravity applies in both airborne states.
    #[inline]
    pub fn airborne(self) -> bool {
        !matches!(self, MotionState::Grounded)
    }
}

/// Which way the player faces. Purely cosmetic: it selects the body sprite,
/// while movement and launch direction come from the held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Left,
}

/// The player: a 13x17 pixel box addressed by its top-left corner, in
/// fixed-point world coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2Fx,
    pub vel: Vec2Fx,
    pub motion: MotionState,
    pub facing: Facing,
    /// Banked jump charge, in ticks held. Charging is in progress exactly
    /// when this is nonzero while grounded.
    pub jump_charge: i16,
}

impl Player {
    /// Spawn at the level's start tile, airborne so the first ticks settle
    /// onto whatever is below.
    pub fn spawn(level: &Level) -> Player {
        let (x, y) = level.start_px();
        Player {
            pos: Vec2Fx::new(Fixed::from_int(x as i16), Fixed::from_int(y as i16)),
            vel: Vec2Fx::ZERO,
            motion: MotionState::Flying,
            facing: Facing::Right,
            jump_charge: 0,
        }
    }
}

/// Camera origin in whole pixels, top-left corner of the fixed 448x256 view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub x: u16,
    pub y: u16,
}

impl Camera {
    /// Center the view on the player's box center, clamped so the view
    /// never leaves the world. Worlds smaller than the view pin the camera
    /// to the origin.
    pub fn follow(&mut self, player: &Player, world_width: usize, world_height: usize) {
        let center_x = i32::from(player.pos.x.ifloor()) + (PLAYER_WIDTH as i32) / 2;
        let center_y = i32::from(player.pos.y.ifloor()) + (PLAYER_HEIGHT as i32) / 2;

        let max_x = world_width.saturating_sub(VIEW_WIDTH) as i32;
        let max_y = world_height.saturating_sub(VIEW_HEIGHT) as i32;
        self.x = (center_x - (VIEW_WIDTH as i32) / 2).clamp(0, max_x) as u16;
        self.y = (center_y - (VIEW_HEIGHT as i32) / 2).clamp(0, max_y) as u16;
    }
}

/// Digital input snapshot fed into each tick.
///
/// The movement fields are level-triggered: the host sets them from its own
/// key state before each `advance` call. `pointer_released` is edge-triggered
/// and consumed by the first reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub jump: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub action: bool,
    pointer_released: bool,
}

impl InputState {
    /// Latch a pointer-release edge from the host event loop.
    pub fn set_pointer_released(&mut self) {
        self.pointer_released = true;
    }

    /// Read and clear the pointer-release edge.
    pub fn take_pointer_released(&mut self) -> bool {
        std::mem::take(&mut self.pointer_released)
    }
}
