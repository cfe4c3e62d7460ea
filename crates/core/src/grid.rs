//! Grid module - the colored playfield and its mutations
//!
//! The grid is `rows x cols` cells, each holding a color index (`EMPTY` = 0).
//! Uses a flat vector in row-major order; dimensions are fixed at creation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Mask origins are given as (row, col).

use tracing::trace;

use crate::mask::ShapeMask;
use crate::types::{Cell, EMPTY};

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a grid from rows of color indices (fixtures and tests)
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "grid rows must all have {} cells", cols);
            cells.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell at (row, col) for in-bounds scans
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(EMPTY))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || (x as usize) >= self.cols || y < 0 || (y as usize) >= self.rows
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Empty every grid cell covered by a set cell of `mask` placed at (row, col)
    ///
    /// Cells that fall outside the grid are ignored. Returns the number of cells
    /// that held a color before the call.
    pub fn clear_shape(&mut self, mask: &ShapeMask, row: usize, col: usize) -> usize {
        let mut cleared = 0;
        for (dr, dc) in mask.cells() {
            let (r, c) = (row + dr, col + dc);
            if r >= self.rows || c >= self.cols {
                continue;
            }
            let idx = r * self.cols + c;
            if self.cells[idx] != EMPTY {
                cleared += 1;
            }
            self.cells[idx] = EMPTY;
        }
        cleared
    }

    /// Run one gravity pass: every colored cell above an empty cell falls one row
    ///
    /// Rows are processed bottom-up so that no cell falls more than one row per
    /// pass; a stacked column moves down together. Returns the number of cells moved.
    pub fn compact_once(&mut self) -> usize {
        self.compact_once_around(None)
    }

    /// Gravity pass that treats `blocker` (x, y) as occupied
    ///
    /// The active piece lives outside the grid; passing its position keeps a
    /// falling cell from landing on top of it.
    pub fn compact_once_around(&mut self, blocker: Option<(i8, i8)>) -> usize {
        if self.rows < 2 {
            return 0;
        }
        let blocked = blocker.and_then(|(x, y)| self.index(x, y));

        let mut moved = 0;
        for y in (0..self.rows - 1).rev() {
            for x in 0..self.cols {
                let here = y * self.cols + x;
                let below = here + self.cols;
                if Some(below) == blocked {
                    continue;
                }
                if self.cells[here] != EMPTY && self.cells[below] == EMPTY {
                    self.cells[below] = self.cells[here];
                    self.cells[here] = EMPTY;
                    moved += 1;
                    trace!(x, y, "cell fell one row");
                }
            }
        }
        moved
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols.max(1)).map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(4, 0), Some(4));
        assert_eq!(grid.index(0, 1), Some(5));
        assert_eq!(grid.index(4, 6), Some(34));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(5, 0), None);
        assert_eq!(grid.index(0, 7), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(7, 5);
        grid.set(0, 0, 1);
        grid.set(3, 4, 6);

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(3, 4), Some(6));
        assert_eq!(grid.cells[0], 1);
        assert_eq!(grid.cells[4 * 5 + 3], 6);
        assert_eq!(grid.at(4, 3), 6);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = vec![vec![0u8, 1, 0], vec![2, 0, 3]];
        let grid = Grid::from_rows(&rows);
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_clear_shape_only_touches_set_cells() {
        let mut grid = Grid::from_rows(&[
            [4u8, 4, 4],
            [9, 4, 9],
            [0, 0, 0],
        ]);
        let t = ShapeMask::from_rows(&[[1u8, 1, 1], [0, 1, 0]]).unwrap();
        assert_eq!(grid.clear_shape(&t, 0, 0), 4);
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 0, 0], vec![9, 0, 9], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_compact_once_moves_stack_one_row() {
        let mut grid = Grid::from_rows(&[[1u8, 0], [2, 0], [0, 3]]);
        assert_eq!(grid.compact_once(), 2);
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![1, 0], vec![2, 3]]);
        assert_eq!(grid.compact_once(), 0);
    }

    #[test]
    fn test_compact_once_includes_last_column() {
        let mut grid = Grid::from_rows(&[[0u8, 0, 5], [0, 0, 0]]);
        assert_eq!(grid.compact_once(), 1);
        assert_eq!(grid.get(2, 1), Some(5));
    }

    #[test]
    fn test_compact_once_around_blocker() {
        let mut grid = Grid::from_rows(&[[7u8, 7], [0, 0]]);
        assert_eq!(grid.compact_once_around(Some((0, 1))), 1);
        assert_eq!(grid.to_rows(), vec![vec![7, 0], vec![0, 7]]);
    }
}
