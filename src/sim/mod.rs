//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-point arithmetic only, no floats
//! - Fixed timestep only
//! - Precomputed immutable maps, no hidden globals
//! - No rendering or platform dependencies

pub mod collision;
pub mod sdf;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::collision_sweep;
pub use sdf::DistanceField;
pub use state::{Camera, Facing, InputState, MotionState, Player};
pub use tick::tick;
pub use world::{PlayerMap, WorldMap};
