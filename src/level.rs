//! ASCII level layouts
//!
//! A level is a rectangular character grid: space for air, `b` for a solid
//! block, `2`/`3`/`4` for the three ramp shapes and `s` for the player start.
//! The border row/column is implied solid whatever the layout says there.
//!
//! Parsing also performs the run-length pass: for each tile shape, maximal
//! horizontal runs of that character are recorded as `(x, y, length)`
//! triples. The rasterizer later stamps one tile-sized shape per covered
//! cell, so a run is a compact iteration order, not a single wide stamp.

use thiserror::Error;

use crate::consts::TILE_SIZE;

/// The shipped world design, 18x35 tiles. Unknown characters (the `f` cells)
/// are decorative and decode as air.
pub const DEFAULT_LEVEL: &str = "\
bbbbbbbbbbbbbbbbbb\n\
b                b\n\
b                b\n\
b                b\n\
bs               b\n\
b                b\n\
b   bbbbbbbb     b\n\
b  bb            b\n\
b                b\n\
b  bbbbb bbb     b\n\
b                b\n\
b2               b\n\
b   bbbbbb       b\n\
b            bbbbb\n\
b   3     b      b\n\
b  3b            b\n\
b 3bb            b\n\
b      b         b\n\
b                b\n\
b2        b2     b\n\
bb2      3bbb    b\n\
bbb2    3b       b\n\
bbbb2  3b4       b\n\
b            bb  b\n\
b                b\n\
b      3b       fb\n\
b    b           b\n\
b                b\n\
b    b     b     b\n\
b   fb     b     b\n\
bbbbbb           b\n\
b          bbb bbb\n\
b                b\n\
bf    3bbb2      b\n\
bbbbbbbbbbbbbbbbbb";

/// Maximum pixels a single recorded run may cover.
const MAX_RUN_LEN: u16 = 256;

/// Maximum level dimension in tiles. Run coordinates are stored as `u8`,
/// so interior tile coordinates must fit 0..=255.
const MAX_LEVEL_TILES: usize = 256;

/// The closed set of tile shapes a layout character can decode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShape {
    /// Full solid square.
    Block,
    /// Triangle anchored bottom-left: row i fills columns `[0, i]`.
    LowerLeftTriangle,
    /// Triangle anchored bottom-right: row i fills the last `i + 1` columns.
    LowerRightTriangle,
    /// Triangle anchored top-left: row i fills columns `[0, tile - i)`.
    UpperLeftTriangle,
}

impl TileShape {
    pub const ALL: [TileShape; 4] = [
        TileShape::Block,
        TileShape::LowerLeftTriangle,
        TileShape::LowerRightTriangle,
        TileShape::UpperLeftTriangle,
    ];

    /// The layout character this shape is keyed on.
    pub const fn glyph(self) -> char {
        match self {
            TileShape::Block => 'b',
            TileShape::LowerLeftTriangle => '2',
            TileShape::LowerRightTriangle => '3',
            TileShape::UpperLeftTriangle => '4',
        }
    }
}

/// A horizontal run of one tile shape, in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRun {
    pub x: u8,
    pub y: u8,
    /// Number of tiles covered, 1..=256.
    pub len: u16,
}

/// Layout problems caught at parse time. The simulation has no recoverable
/// error paths after init, so everything a malformed layout could cause is
/// rejected here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level is empty")]
    Empty,
    #[error("row {row} is {got} characters wide, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("level must be at least 3x3 tiles, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("level must be at most 256x256 tiles, got {width}x{height}")]
    TooLarge { width: usize, height: usize },
    #[error("level has no player start marker ('s')")]
    MissingStart,
    #[error("level has more than one player start marker ('s')")]
    DuplicateStart,
}

/// A parsed, validated level layout.
#[derive(Debug, Clone)]
pub struct Level {
    width: usize,
    height: usize,
    /// Player start in tile coordinates.
    start: (u16, u16),
    /// Runs per shape, indexed parallel to [`TileShape::ALL`].
    runs: [Vec<TileRun>; 4],
}

impl Level {
    /// Parse a newline-separated layout.
    pub fn parse(text: &str) -> Result<Level, LevelError> {
        let rows: Vec<&str> = text.lines().collect();
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = rows[0].len();
        let height = rows.len();
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(LevelError::RaggedRow {
                    row,
                    got: line.len(),
                    expected: width,
                });
            }
        }
        if width < 3 || height < 3 {
            return Err(LevelError::TooSmall { width, height });
        }
        if width > MAX_LEVEL_TILES || height > MAX_LEVEL_TILES {
            return Err(LevelError::TooLarge { width, height });
        }

        let cells: Vec<&[u8]> = rows.iter().map(|r| r.as_bytes()).collect();

        let mut start = None;
        for (y, row) in cells.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                if ch == b's' {
                    if start.is_some() {
                        return Err(LevelError::DuplicateStart);
                    }
                    start = Some((x as u16, y as u16));
                }
            }
        }
        let start = start.ok_or(LevelError::MissingStart)?;

        let runs = TileShape::ALL.map(|shape| scan_runs(&cells, shape.glyph() as u8));

        Ok(Level {
            width,
            height,
            start,
            runs,
        })
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// World width in pixels.
    pub fn width_px(&self) -> usize {
        self.width * TILE_SIZE
    }

    /// World height in pixels.
    pub fn height_px(&self) -> usize {
        self.height * TILE_SIZE
    }

    /// Player start tile.
    pub fn start_tile(&self) -> (u16, u16) {
        self.start
    }

    /// Player start position in pixels (top-left of the start tile).
    pub fn start_px(&self) -> (u16, u16) {
        (
            self.start.0 * TILE_SIZE as u16,
            self.start.1 * TILE_SIZE as u16,
        )
    }

    /// The recorded runs for one shape.
    pub fn runs(&self, shape: TileShape) -> &[TileRun] {
        &self.runs[shape as usize]
    }
}

/// Record maximal horizontal runs of `glyph` over the interior (the border
/// ring is stamped unconditionally by the rasterizer and never scanned).
fn scan_runs(cells: &[&[u8]], glyph: u8) -> Vec<TileRun> {
    let width = cells[0].len();
    let height = cells.len();
    let mut runs = Vec::new();

    for y in 1..height - 1 {
        let mut x = 1;
        while x < width - 1 {
            if cells[y][x] != glyph {
                x += 1;
                continue;
            }

            let start_x = x;
            let mut len: u16 = 1;
            x += 1;
            while x < width - 1 && len < MAX_RUN_LEN && cells[y][x] == glyph {
                len += 1;
                x += 1;
            }

            runs.push(TileRun {
                x: start_x as u8,
                y: y as u8,
                len,
            });
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_parses() {
        let level = Level::parse(DEFAULT_LEVEL).unwrap();
        assert_eq!(level.width(), 18);
        assert_eq!(level.height(), 35);
        assert_eq!(level.start_tile(), (1, 4));
        assert_eq!(level.start_px(), (32, 128));
    }

    #[test]
    fn default_level_runs() {
        let level = Level::parse(DEFAULT_LEVEL).unwrap();
        // Row 6 carries one 8-tile block run starting at x=4.
        let row6: Vec<_> = level
            .runs(TileShape::Block)
            .iter()
            .filter(|r| r.y == 6)
            .collect();
        assert_eq!(row6.len(), 1);
        assert_eq!((row6[0].x, row6[0].len), (4, 8));
        // Row 22 mixes three shapes: "bbbb2  3b4".
        assert!(
            level
                .runs(TileShape::LowerLeftTriangle)
                .iter()
                .any(|r| r.y == 22 && r.x == 4 && r.len == 1)
        );
        assert!(
            level
                .runs(TileShape::LowerRightTriangle)
                .iter()
                .any(|r| r.y == 22 && r.x == 7 && r.len == 1)
        );
        assert!(
            level
                .runs(TileShape::UpperLeftTriangle)
                .iter()
                .any(|r| r.y == 22 && r.x == 9 && r.len == 1)
        );
    }

    #[test]
    fn border_cells_are_not_scanned() {
        // Blocks on the border ring must not produce runs; the rasterizer
        // stamps the border on its own.
        let level = Level::parse("bbb\nbsb\nbbb").unwrap();
        assert!(level.runs(TileShape::Block).is_empty());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Level::parse("bbbb\nbs b\nbbb").unwrap_err();
        assert_eq!(
            err,
            LevelError::RaggedRow {
                row: 2,
                got: 3,
                expected: 4
            }
        );
    }

    #[test]
    fn start_marker_is_mandatory_and_unique() {
        assert_eq!(
            Level::parse("bbb\nb b\nbbb").unwrap_err(),
            LevelError::MissingStart
        );
        assert_eq!(
            Level::parse("bbbb\nbssb\nbbbb").unwrap_err(),
            LevelError::DuplicateStart
        );
    }

    #[test]
    fn oversized_levels_rejected() {
        // A 300-tile-wide row would put interior blocks past the u8 run
        // coordinate range (a block at x=259 would wrap to x=3), so the
        // layout must be rejected up front.
        let mut middle = String::from("bs");
        middle.push_str(&" ".repeat(257));
        middle.push('b');
        middle.push_str(&" ".repeat(39));
        middle.push('b');
        let layout = format!("{0}\n{1}\n{0}", "b".repeat(300), middle);
        assert_eq!(
            Level::parse(&layout).unwrap_err(),
            LevelError::TooLarge {
                width: 300,
                height: 3
            }
        );
    }

    #[test]
    fn too_small_rejected() {
        assert_eq!(
            Level::parse("bb\nbb").unwrap_err(),
            LevelError::TooSmall {
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn unknown_characters_decode_as_air() {
        let level = Level::parse("bbbb\nbsfb\nbbbb").unwrap();
        for shape in TileShape::ALL {
            assert!(level.runs(shape).is_empty());
        }
    }
}
