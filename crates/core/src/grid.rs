//! Grid module - the playfield
//!
//! The grid is a fixed `rows x cols` matrix where each cell is empty or holds
//! the color of the piece that locked there.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Dimensions never change after creation.

use crate::error::GridError;
use crate::types::{Cell, Color};

/// The playfield - `rows x cols` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: u16, cols: u16) -> Self {
        let (rows, cols) = (rows as usize, cols as usize);
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
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
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) holds a block.
    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, GridError> {
        self.get(x, y)
            .map(|cell| cell.is_some())
            .ok_or(GridError::OutOfRange { x, y })
    }

    /// Mark (x, y) as occupied with `color`.
    ///
    /// The cell is expected to be empty; overwriting a block means a piece
    /// was locked without a collision check.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfRange { x, y })?;
        debug_assert!(self.cells[idx].is_none(), "cell ({x}, {y}) already occupied");
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// One row as a slice. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row holds at least one block
    pub fn row_has_blocks(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().any(|cell| cell.is_some())
    }

    /// Remove every full row at once and drop the rows above into the gap.
    ///
    /// The set of full rows is taken from the grid as it is before anything
    /// moves; surviving rows keep their order and the same number of empty
    /// rows appear at the top. Returns the removed row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let cleared: Vec<usize> = (0..self.rows).rev().filter(|&y| self.is_row_full(y)).collect();
        if cleared.is_empty() {
            return cleared;
        }

        let width = self.cols;
        let mut write_y = self.rows;
        for read_y in (0..self.rows).rev() {
            if cleared.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Color = Color::new(1, 2, 3);

    fn fill_row(grid: &mut Grid, y: i32) {
        for x in 0..grid.cols() as i32 {
            grid.set(x, y, C).unwrap();
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_is_occupied_out_of_range() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.is_occupied(3, 0), Err(GridError::OutOfRange { x: 3, y: 0 }));
        assert_eq!(grid.is_occupied(0, -1), Err(GridError::OutOfRange { x: 0, y: -1 }));
        assert_eq!(grid.is_occupied(2, 3), Ok(false));
    }

    #[test]
    fn test_set_writes_color() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, C).unwrap();
        assert_eq!(grid.get(1, 2), Some(Some(C)));
        assert_eq!(grid.cells()[2 * 3 + 1], Some(C));
        assert!(grid.set(3, 0, C).is_err());
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut grid = Grid::new(5, 3);
        fill_row(&mut grid, 4);
        fill_row(&mut grid, 2);
        grid.set(0, 3, Color::RED).unwrap();
        grid.set(1, 1, Color::BLUE).unwrap();

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared, vec![4, 2]);

        // Row 3 dropped one, row 1 dropped two.
        assert_eq!(grid.get(0, 4), Some(Some(Color::RED)));
        assert_eq!(grid.get(1, 3), Some(Some(Color::BLUE)));
        assert_eq!(grid.occupied_count(), 2);
        assert!(!grid.row_has_blocks(0));
        assert!(!grid.row_has_blocks(1));
        assert!(!grid.row_has_blocks(2));
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 2, C).unwrap();
        let before = grid.clone();
        assert!(grid.clear_full_rows().is_empty());
        assert_eq!(grid, before);
    }
}
