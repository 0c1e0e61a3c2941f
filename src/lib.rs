//! Crag - a deterministic 2D platformer simulation core
//!
//! A complete little platformer world in a library: fixed-point physics on
//! a pixel-perfect collision map, charge-and-release jumping, ramp sliding,
//! and procedurally generated textures, all bit-for-bit reproducible across
//! platforms. The host owns the window, the GPU and the input events; this
//! crate owns everything the game *is*.
//!
//! Core modules:
//! - `fixed`: 16.16 fixed-point arithmetic, the only number type the
//!   simulation uses
//! - `level`: ASCII level layouts and their validation
//! - `sim`: collision maps, distance field, the per-tick physics
//! - `texture`: init-time procedural textures (noise, bricks, sprites)
//! - `game`: the owning context plus the frame clock glue
//! - `render`: the small per-frame contract handed to the host

pub mod clock;
pub mod fixed;
pub mod game;
pub mod grid;
pub mod level;
pub mod render;
pub mod sim;
pub mod texture;
pub mod tuning;

pub use fixed::{Fixed, Vec2Fx};
pub use game::{Game, InitError};
pub use level::{DEFAULT_LEVEL, Level, LevelError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Tile edge length in pixels; also the world border thickness.
    pub const TILE_SIZE: usize = 32;

    /// Player bounding box, in pixels.
    pub const PLAYER_WIDTH: usize = 13;
    pub const PLAYER_HEIGHT: usize = 17;

    /// Fixed view size in world pixels (14 x 8 tiles).
    pub const VIEW_WIDTH: usize = 448;
    pub const VIEW_HEIGHT: usize = 256;

    /// Logical simulation rate in ticks per second.
    pub const TICK_RATE: u64 = 60;
    /// Maximum catch-up ticks per `advance` call to prevent spiral of death.
    pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

    /// Background brick cell size in pixels.
    pub const BRICK_WIDTH: usize = 16;
    pub const BRICK_HEIGHT: usize = 8;
}
