//! Row-major 2D storage
//!
//! Every world-sized map in the crate (collision bitmaps, distance field,
//! noise and background textures) is a `Grid` over one flat `Vec`: linear
//! memory, no per-row allocations, and a `bytemuck`-friendly byte view for
//! texture upload.

use bytemuck::Pod;

/// A dense `width * height` grid addressed as `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// A zero-initialized grid. Generators rely on this default: cells they
    /// never touch keep the default value.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = value;
    }

    /// One row as a mutable slice (used by the shape rasterizers to stamp
    /// horizontal spans in one go).
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T: Pod> Grid<T> {
    /// The raw bytes of the grid, row-major. This is the upload format for
    /// the render layer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let g: Grid<u8> = Grid::new(4, 3);
        assert!(g.as_slice().iter().all(|&v| v == 0));
        assert_eq!(g.as_slice().len(), 12);
    }

    #[test]
    fn get_set_round_trip() {
        let mut g: Grid<bool> = Grid::new(5, 5);
        g.set(3, 2, true);
        assert!(g.get(3, 2));
        assert!(!g.get(2, 3));
    }

    #[test]
    fn rows_are_contiguous() {
        let mut g: Grid<u8> = Grid::new(3, 2);
        g.row_mut(1).fill(7);
        assert_eq!(g.as_slice(), &[0, 0, 0, 7, 7, 7]);
        assert_eq!(g.as_bytes(), &[0, 0, 0, 7, 7, 7]);
    }
}
