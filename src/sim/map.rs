//! Static occupancy grid
//!
//! The dungeon is a rectangular grid of cells addressed as `(col, row)`, with
//! `col` growing along world +x and `row` along world +y. The grid is read-only
//! once built.

use glam::Vec2;

use crate::error::MapError;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
}

impl Cell {
    /// `0` is empty, anything else is a wall
    pub fn from_code(code: u8) -> Self {
        if code == 0 { Cell::Empty } else { Cell::Wall }
    }
}

/// Result of a bounds-checked grid lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellQuery {
    Empty,
    Wall,
    /// Outside the grid; callers treat map edges as implicit walls
    OutOfBounds,
}

impl CellQuery {
    /// Only in-bounds empty cells can be entered
    #[inline]
    pub fn is_passable(self) -> bool {
        self == CellQuery::Empty
    }
}

/// The built-in 8x8 dungeon (1 = wall, 0 = path)
pub const DUNGEON: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Rectangular grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Build from a fixed-size array; rectangular by construction
    pub fn from_array<const W: usize, const H: usize>(grid: &[[u8; W]; H]) -> Self {
        let cells = grid
            .iter()
            .flat_map(|row| row.iter().map(|&c| Cell::from_code(c)))
            .collect();
        Self {
            cols: W,
            rows: H,
            cells,
        }
    }

    /// Build from caller-supplied rows, rejecting empty or ragged grids
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(cols * rows.len());
        for (row, data) in rows.iter().enumerate() {
            let data = data.as_ref();
            if data.len() != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found: data.len(),
                });
            }
            cells.extend(data.iter().map(|&c| Cell::from_code(c)));
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            cells,
        })
    }

    /// The built-in dungeon
    pub fn dungeon() -> Self {
        Self::from_array(&DUNGEON)
    }

    /// Number of columns (x extent in cells)
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows (y extent in cells)
    pub fn height(&self) -> usize {
        self.rows
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, col: i32, row: i32) -> CellQuery {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return CellQuery::OutOfBounds;
        }
        match self.cells[row as usize * self.cols + col as usize] {
            Cell::Empty => CellQuery::Empty,
            Cell::Wall => CellQuery::Wall,
        }
    }

    /// Look up the cell containing a world-space point
    pub fn cell_at_point(&self, p: Vec2, cell_size: f32) -> CellQuery {
        let (col, row) = cell_coords(p, cell_size);
        self.cell_at(col, row)
    }
}

/// Integer cell coordinates of a world-space point
///
/// Huge and infinite coordinates saturate and land out of bounds.
#[inline]
pub fn cell_coords(p: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}
