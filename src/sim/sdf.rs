//! Signed Euclidean distance field
//!
//! One fixed-point grid over the whole world: empty pixels hold the distance
//! to the nearest solid pixel, solid pixels hold the negated distance to the
//! nearest empty pixel. Built once at init from the collision bitmap and
//! consumed by the render layer (edge glow shading samples it per pixel).
//!
//! Classic two-pass squared-distance transform, one polarity at a time: a
//! horizontal pass records each pixel's squared distance to the nearest
//! target column in its row, then a vertical pass takes the minimum of
//! `row_dist2 + dy*dy` over the column. Squared distances are capped at
//! 65535 before the square root.

use crate::fixed::Fixed;
use crate::grid::Grid;
use crate::sim::world::WorldMap;

/// Squared distances at or above this read as "far" and all map to the same
/// capped value.
const DIST2_CAP: u32 = 65_535;

/// Rows further than this cannot produce a squared distance below the cap
/// (256 * 256 > 65535), so the combine pass never looks past it.
const SCAN_WINDOW: usize = 255;

#[derive(Debug, Clone)]
pub struct DistanceField {
    grid: Grid<Fixed>,
}

impl DistanceField {
    pub fn build(world: &WorldMap) -> DistanceField {
        let mut grid = Grid::new(world.width(), world.height());
        transform(world, &mut grid, false);
        transform(world, &mut grid, true);
        DistanceField { grid }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Signed distance at a pixel: positive in the open, negative inside
    /// solid geometry.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Fixed {
        self.grid.get(x, y)
    }

    /// Raw texel bytes for upload, row-major 16.16 values.
    pub fn as_bytes(&self) -> &[u8] {
        self.grid.as_bytes()
    }
}

/// One polarity of the transform. `inverse = false` measures empty pixels
/// against solid ones and stores positive distances; `inverse = true`
/// measures solid pixels against empty ones and stores negative distances.
/// Target pixels themselves are skipped, so the two calls together touch
/// every pixel exactly once.
fn transform(world: &WorldMap, field: &mut Grid<Fixed>, inverse: bool) {
    let width = world.width();
    let height = world.height();

    // Horizontal pass: per-row squared distance to the nearest target
    // column, via a forward and a backward sweep. Rows with no target at
    // all keep width^2, which caps later.
    let mut row_dist2: Grid<u32> = Grid::new(width, height);
    for y in 0..height {
        let mut dist = width as u32;
        for x in 0..width {
            if world.solid(x, y) != inverse {
                dist = 0;
            } else {
                dist += 1;
            }
            row_dist2.set(x, y, dist * dist);
        }
        let mut dist = width as u32;
        for x in (0..width).rev() {
            if world.solid(x, y) != inverse {
                dist = 0;
            } else {
                dist += 1;
            }
            let d2 = dist * dist;
            if d2 < row_dist2.get(x, y) {
                row_dist2.set(x, y, d2);
            }
        }
    }

    // Vertical combine pass plus the square root.
    for y in 0..height {
        for x in 0..width {
            let mut min = row_dist2.get(x, y);
            if min == 0 {
                // Target pixel; the other polarity fills it in.
                continue;
            }

            let lo = y.saturating_sub(SCAN_WINDOW);
            let hi = (y + SCAN_WINDOW).min(height - 1);
            for i in lo..=hi {
                let dy = y.abs_diff(i) as u32;
                let hyp = row_dist2.get(x, i) + dy * dy;
                if hyp < min {
                    min = hyp;
                }
            }

            let dist = Fixed::sqrt(min.min(DIST2_CAP) as u16);
            field.set(x, y, if inverse { -dist } else { dist });
        }
    }
}
