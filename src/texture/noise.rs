//! Noise textures
//!
//! A world-sized white noise sheet drives everything that needs randomness
//! at init (brick tinting, dithering), and a four-octave blend of it makes
//! the fractal sheet used for the brick surface texture. The generator seed
//! is a fixed constant, so both sheets are identical on every run; the
//! noise is part of the game's look, not a source of variation.

use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;
use thiserror::Error;

use crate::grid::Grid;

/// Generator seed: the first four words of the SHA-256 initial hash value.
/// Arbitrary, but fixed forever.
const SEED: [u32; 4] = [0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoiseError {
    /// The generator emits 4 bytes at a time straight into the sheet, so
    /// rows must pack evenly.
    #[error("noise sheet width {0} is not a multiple of 4")]
    WidthNotAligned(usize),
}

/// Fill a `width x height` sheet with xoshiro128** output, 4 bytes per
/// draw, little-endian, row-major.
pub fn white_noise(width: usize, height: usize) -> Result<Grid<u8>, NoiseError> {
    if width % 4 != 0 {
        return Err(NoiseError::WidthNotAligned(width));
    }

    let mut seed = [0u8; 16];
    for (chunk, word) in seed.chunks_exact_mut(4).zip(SEED) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    let mut rng = Xoshiro128StarStar::from_seed(seed);

    let mut grid = Grid::new(width, height);
    for chunk in grid.as_mut_slice().chunks_exact_mut(4) {
        chunk.copy_from_slice(&rng.next_u32().to_le_bytes());
    }
    Ok(grid)
}

/// Blend four octaves of the white noise sheet into a smoother fractal
/// sheet of the same size.
///
/// Octave `i` samples the white sheet downscaled by `2^(4 - i)` with
/// bilinear weights from the discarded low bits, and contributes its result
/// shifted down by `i + 1`. All intermediate math is integral; the octave
/// sum wraps in u8.
pub fn fractal_noise(white: &Grid<u8>) -> Grid<u8> {
    let width = white.width();
    let height = white.height();
    let mut grid = Grid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut sum: u8 = 0;

            for i in 0..4u32 {
                let scale = 4 - i;
                let f = 1u32 << scale;

                let y_i = y >> scale;
                let y_f = (y as u32) & (f - 1);
                let x_i = x >> scale;
                let x_f = (x as u32) & (f - 1);

                let sample = |dx: usize, dy: usize| u32::from(white.get(x_i + dx, y_i + dy));
                let blended = sample(0, 0) * (f - y_f) * (f - x_f)
                    + sample(1, 0) * (f - y_f) * x_f
                    + sample(0, 1) * y_f * (f - x_f)
                    + sample(1, 1) * y_f * x_f;

                sum = sum.wrapping_add(((blended >> (scale * 2)) as u8) >> (i + 1));
            }

            grid.set(x, y, sum);
        }
    }

    grid
}
