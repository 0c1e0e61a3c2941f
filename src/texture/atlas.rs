//! Player sprite atlas
//!
//! The player art ships as nibble-packed indexed pixels compiled into the
//! binary: four 16x16 layers at 4 bits per pixel, two pixels per byte, low
//! nibble first. At init the layers are expanded against the palette into
//! RGBA texels for a one-time upload as a small texture array.
//!
//! Layer 0 is blank (kept so layer indices match sprite indices), layer 1
//! is the hat worn above the head, layers 2 and 3 are the body facing
//! right and left.

use crate::grid::Grid;
use crate::texture::Rgba8;

pub const SPRITE_SIZE: usize = 16;
pub const LAYER_COUNT: usize = 4;

const PALETTE: [Rgba8; 16] = [
    Rgba8::TRANSPARENT,              // 0
    Rgba8::new(0, 0, 0, 255),        // 1 solid black
    Rgba8::new(230, 209, 188, 255),  // 2 skin
    Rgba8::new(228, 218, 153, 255),  // 3 blonde hair
    Rgba8::new(217, 200, 104, 255),  // 4 blonde hair accent
    Rgba8::new(208, 70, 72, 255),    // 5 red coat
    Rgba8::new(170, 51, 51, 255),    // 6 red coat accent
    Rgba8::new(50, 101, 36, 255),    // 7 green eyes
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
    Rgba8::TRANSPARENT,
];

#[rustfmt::skip]
const PIXELS: [[[u8; 8]; 16]; LAYER_COUNT] = [
    [
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x10, 0x11, 0x11, 0x01, 0x00, 0x00],
    ],
    [
        [0x00, 0x10, 0x31, 0x33, 0x33, 0x13, 0x01, 0x00],
        [0x00, 0x10, 0x34, 0x33, 0x33, 0x33, 0x01, 0x00],
        [0x00, 0x10, 0x34, 0x33, 0x33, 0x33, 0x01, 0x00],
        [0x00, 0x41, 0x34, 0x22, 0x22, 0x22, 0x01, 0x00],
        [0x00, 0x41, 0x23, 0x22, 0x22, 0x22, 0x14, 0x00],
        [0x00, 0x41, 0x23, 0x77, 0x22, 0x72, 0x01, 0x00],
        [0x00, 0x11, 0x23, 0x77, 0x22, 0x72, 0x11, 0x01],
        [0x00, 0x31, 0x44, 0x22, 0x22, 0x22, 0x44, 0x01],
        [0x00, 0x41, 0x33, 0x33, 0x33, 0x33, 0x33, 0x01],
        [0x00, 0x10, 0x34, 0x33, 0x33, 0x33, 0x13, 0x00],
        [0x00, 0x10, 0x66, 0x34, 0x33, 0x33, 0x14, 0x00],
        [0x00, 0x10, 0x55, 0x45, 0x33, 0x43, 0x01, 0x00],
        [0x00, 0x10, 0x55, 0x55, 0x44, 0x54, 0x01, 0x00],
        [0x00, 0x10, 0x66, 0x11, 0x11, 0x66, 0x01, 0x00],
        [0x00, 0x10, 0x16, 0x00, 0x10, 0x16, 0x00, 0x00],
        [0x00, 0x10, 0x01, 0x00, 0x10, 0x01, 0x00, 0x00],
    ],
    [
        [0x00, 0x10, 0x31, 0x33, 0x33, 0x13, 0x01, 0x00],
        [0x00, 0x10, 0x33, 0x33, 0x33, 0x43, 0x01, 0x00],
        [0x00, 0x10, 0x33, 0x33, 0x33, 0x43, 0x01, 0x00],
        [0x00, 0x10, 0x22, 0x22, 0x22, 0x43, 0x14, 0x00],
        [0x00, 0x41, 0x22, 0x22, 0x22, 0x32, 0x14, 0x00],
        [0x00, 0x10, 0x27, 0x22, 0x77, 0x32, 0x14, 0x00],
        [0x10, 0x11, 0x27, 0x22, 0x77, 0x32, 0x11, 0x00],
        [0x10, 0x44, 0x22, 0x22, 0x22, 0x44, 0x13, 0x00],
        [0x10, 0x33, 0x33, 0x33, 0x33, 0x33, 0x14, 0x00],
        [0x00, 0x31, 0x34, 0x33, 0x33, 0x43, 0x01, 0x00],
        [0x00, 0x41, 0x33, 0x33, 0x43, 0x66, 0x01, 0x00],
        [0x00, 0x10, 0x24, 0x33, 0x54, 0x55, 0x01, 0x00],
        [0x00, 0x10, 0x45, 0x44, 0x55, 0x55, 0x01, 0x00],
        [0x00, 0x10, 0x66, 0x11, 0x11, 0x66, 0x01, 0x00],
        [0x00, 0x00, 0x61, 0x01, 0x00, 0x61, 0x01, 0x00],
        [0x00, 0x00, 0x10, 0x01, 0x00, 0x10, 0x01, 0x00],
    ],
];

/// The expanded RGBA sprite layers, built once at init.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    layers: [Grid<Rgba8>; LAYER_COUNT],
}

impl SpriteAtlas {
    pub fn build() -> SpriteAtlas {
        let layers = PIXELS.map(|layer| {
            let mut grid = Grid::new(SPRITE_SIZE, SPRITE_SIZE);
            for (y, row) in layer.iter().enumerate() {
                for (i, &byte) in row.iter().enumerate() {
                    grid.set(i * 2, y, PALETTE[usize::from(byte & 0x0F)]);
                    grid.set(i * 2 + 1, y, PALETTE[usize::from(byte >> 4)]);
                }
            }
            grid
        });
        SpriteAtlas { layers }
    }

    /// One 16x16 RGBA layer.
    pub fn layer(&self, index: usize) -> &Grid<Rgba8> {
        &self.layers[index]
    }

    /// All layer bytes concatenated, the upload order of a texture array.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(LAYER_COUNT * SPRITE_SIZE * SPRITE_SIZE * 4);
        for layer in &self.layers {
            bytes.extend_from_slice(layer.as_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_zero_is_blank() {
        let atlas = SpriteAtlas::build();
        for texel in atlas.layer(0).as_slice() {
            assert_eq!(*texel, Rgba8::TRANSPARENT);
        }
    }

    #[test]
    fn hat_sits_on_the_bottom_row() {
        let atlas = SpriteAtlas::build();
        let hat = atlas.layer(1);
        for y in 0..SPRITE_SIZE - 1 {
            for x in 0..SPRITE_SIZE {
                assert_eq!(hat.get(x, y), Rgba8::TRANSPARENT);
            }
        }
        // Bottom row: black brim from x=5 through x=10.
        assert_eq!(hat.get(4, 15), Rgba8::TRANSPARENT);
        for x in 5..=10 {
            assert_eq!(hat.get(x, 15), Rgba8::new(0, 0, 0, 255), "x={x}");
        }
        assert_eq!(hat.get(11, 15), Rgba8::TRANSPARENT);
    }

    #[test]
    fn nibble_order_is_low_first() {
        let atlas = SpriteAtlas::build();
        let body = atlas.layer(2);
        // Row 0 starts 0x00, 0x10, 0x31: pixel 2 is transparent, pixel 3
        // black, pixel 4 black, pixel 5 blonde.
        assert_eq!(body.get(2, 0), Rgba8::TRANSPARENT);
        assert_eq!(body.get(3, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(body.get(4, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(body.get(5, 0), Rgba8::new(228, 218, 153, 255));
    }

    #[test]
    fn upload_bytes_cover_all_layers() {
        let atlas = SpriteAtlas::build();
        assert_eq!(atlas.to_bytes().len(), 4 * 16 * 16 * 4);
    }
}
