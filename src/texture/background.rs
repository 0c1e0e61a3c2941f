//! Brick background composer
//!
//! Paints a running-bond brick wall over every empty world pixel: 16x8
//! bricks, odd courses offset by half a brick, one-pixel mortar lines.
//! Bricks are tinted per brick cell from the white noise sheet, surfaced
//! with the fractal sheet and dithered with the low noise bit. Solid world
//! pixels stay black; the render layer draws geometry over them from the
//! distance field instead.

use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::grid::Grid;
use crate::sim::world::WorldMap;
use crate::texture::Rgb8;

/// Compose the full-world background texture. Grayscale by construction;
/// the shader applies the palette.
pub fn compose_background(world: &WorldMap, white: &Grid<u8>, fractal: &Grid<u8>) -> Grid<Rgb8> {
    let mut grid = Grid::new(world.width(), world.height());

    for y in 0..world.height() {
        let brick_y = y / BRICK_HEIGHT;
        let mortar_y = y % BRICK_HEIGHT;

        // Odd courses shift by half a brick.
        let offset_x = if brick_y & 1 == 1 { BRICK_WIDTH / 2 } else { 0 };

        for x in 0..world.width() {
            if world.solid(x, y) {
                continue;
            }

            let brick_x = (x + offset_x) / BRICK_WIDTH;
            let mortar_x = (x + offset_x) % BRICK_WIDTH;

            let value = if mortar_x < 1 || mortar_y < 1 {
                // Mortar line: dark, lightly textured.
                white.get(x, y) / 16
            } else {
                // Per-brick base tint, blended 3:1 with the fractal sheet.
                let tint = 40u8.wrapping_add(white.get(brick_x, brick_y) / 3);
                let mixed =
                    (((u16::from(tint) << 2) - u16::from(tint) + u16::from(fractal.get(x, y))) / 6)
                        as u8;
                (mixed & !3) | (white.get(x, y) & 1)
            };

            grid.set(x, y, Rgb8::gray(value));
        }
    }

    grid
}
