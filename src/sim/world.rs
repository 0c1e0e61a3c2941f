//! World and player collision maps
//!
//! `WorldMap` is the per-pixel solid/empty bitmap rasterized from the level
//! layout. `PlayerMap` is the Minkowski sum of that bitmap with the player's
//! bounding box: cell (x, y) answers "can the player's origin rest here"
//! directly, so the per-frame sweep never tests box against box. Both are
//! built once at startup and never written again.

use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, TILE_SIZE};
use crate::grid::Grid;
use crate::level::{Level, TileShape};

/// Per-pixel solid/empty bitmap of the whole world.
#[derive(Debug, Clone)]
pub struct WorldMap {
    grid: Grid<bool>,
}

impl WorldMap {
    /// Rasterize a level layout. The border ring of tiles is stamped solid
    /// unconditionally; interior runs stamp one tile-sized shape per covered
    /// cell (the triangle masks are diagonal, so a run cannot be stamped as
    /// one wide rectangle).
    pub fn build(level: &Level) -> WorldMap {
        let mut grid = Grid::new(level.width_px(), level.height_px());

        for tx in 0..level.width() {
            stamp(&mut grid, TileShape::Block, tx * TILE_SIZE, 0);
            stamp(
                &mut grid,
                TileShape::Block,
                tx * TILE_SIZE,
                (level.height() - 1) * TILE_SIZE,
            );
        }
        for ty in 0..level.height() {
            stamp(&mut grid, TileShape::Block, 0, ty * TILE_SIZE);
            stamp(
                &mut grid,
                TileShape::Block,
                (level.width() - 1) * TILE_SIZE,
                ty * TILE_SIZE,
            );
        }

        for shape in TileShape::ALL {
            for run in level.runs(shape) {
                for i in 0..run.len as usize {
                    stamp(
                        &mut grid,
                        shape,
                        (run.x as usize + i) * TILE_SIZE,
                        run.y as usize * TILE_SIZE,
                    );
                }
            }
        }

        WorldMap { grid }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Whether the pixel is covered by a collidable tile.
    #[inline]
    pub fn solid(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
}

/// Stamp one tile shape with its top-left corner at pixel (x, y).
fn stamp(grid: &mut Grid<bool>, shape: TileShape, x: usize, y: usize) {
    for i in 0..TILE_SIZE {
        let (start, len) = match shape {
            TileShape::Block => (0, TILE_SIZE),
            TileShape::LowerLeftTriangle => (0, i + 1),
            TileShape::LowerRightTriangle => (TILE_SIZE - (i + 1), i + 1),
            TileShape::UpperLeftTriangle => (0, TILE_SIZE - i),
        };
        grid.row_mut(y + i)[x + start..x + start + len].fill(true);
    }
}

/// Minkowski sum of the world bitmap and the player's bounding box.
///
/// Cell (x, y) is true iff placing the player's origin (top-left of the
/// 13x17 box) at that pixel would overlap a solid world pixel.
#[derive(Debug, Clone)]
pub struct PlayerMap {
    grid: Grid<bool>,
}

impl PlayerMap {
    /// One-time O(world area x player area) precompute; every later
    /// collision query is an O(1) lookup into the result.
    pub fn build(world: &WorldMap) -> PlayerMap {
        let width = world.width() - (PLAYER_WIDTH - 1);
        let height = world.height() - (PLAYER_HEIGHT - 1);
        let mut grid = Grid::new(width, height);

        for y in 0..height {
            for x in 0..width {
                'cell: for i in 0..PLAYER_HEIGHT {
                    for j in 0..PLAYER_WIDTH {
                        if world.solid(x + j, y + i) {
                            grid.set(x, y, true);
                            break 'cell;
                        }
                    }
                }
            }
        }

        PlayerMap { grid }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Whether the player's box would overlap a solid pixel with its origin
    /// at (x, y).
    #[inline]
    pub fn blocked(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
}
