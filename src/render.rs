//! Per-frame render contract
//!
//! The crate does no drawing; it hands the host a tiny amount of per-frame
//! data (which sprites to stamp where, and the camera window) next to the
//! init-time textures. Sprite positions stay fixed-point so the host
//! decides how to snap them.

use bytemuck::{Pod, Zeroable};

use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::fixed::Fixed;

/// One sprite to draw this frame: a `size`-square quad with its top-left
/// corner at (x, y) in world space, sampling the given atlas layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct SpriteInstance {
    pub x: Fixed,
    pub y: Fixed,
    pub size: u16,
    pub layer: u16,
}

/// The visible window: camera origin plus the fixed view size, in world
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn at(x: u16, y: u16) -> Viewport {
        Viewport {
            x,
            y,
            width: VIEW_WIDTH as u16,
            height: VIEW_HEIGHT as u16,
        }
    }
}
