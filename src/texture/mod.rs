//! Procedural texture generation
//!
//! Everything the renderer samples is generated here once at init: white
//! noise, a fractal blend of it, the brick background and the player sprite
//! atlas. No image assets are loaded from disk.

pub mod atlas;
pub mod background;
pub mod noise;

pub use atlas::SpriteAtlas;
pub use background::compose_background;
pub use noise::{NoiseError, fractal_noise, white_noise};

use bytemuck::{Pod, Zeroable};

/// An RGB texel, 3 bytes, no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// A gray texel with all channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Rgb8 {
        Rgb8 { r: v, g: v, b: v }
    }
}

/// An RGBA texel, 4 bytes, no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
        Rgba8 { r, g, b, a }
    }
}
