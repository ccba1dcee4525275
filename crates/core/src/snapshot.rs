//! Read model handed to the drawing side.
//!
//! A [`GameSnapshot`] is a plain copy of everything a renderer needs. Taking
//! one never mutates the session.

use crate::types::{Cell, Color};

/// Receives one call per drawn cell.
pub trait CellSink {
    /// `color` is `None` for an empty grid cell.
    fn draw_cell(&mut self, row: usize, col: usize, color: Option<Color>);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Locked cells, row-major (row * cols + col)
    pub grid: Vec<Cell>,
    /// Active piece cells as (x, y) grid coordinates, on-grid only
    pub active: Vec<(usize, usize)>,
    pub active_color: Option<Color>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid[row * self.cols + col]
    }

    /// Feed the whole frame to `sink`: every grid cell first (row-major), then
    /// the active piece on top.
    pub fn draw(&self, sink: &mut impl CellSink) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                sink.draw_cell(row, col, self.cell(row, col));
            }
        }
        if let Some(color) = self.active_color {
            for &(col, row) in &self.active {
                sink.draw_cell(row, col, Some(color));
            }
        }
    }
}
