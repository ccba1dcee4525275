//! Error types for the engine.
//!
//! Gameplay never fails: blocked moves and rotations are reported as `false`
//! return values. The only runtime error is an out-of-range grid access, which
//! means a caller skipped the collision check. Configuration has its own error
//! type because it is validated once, before a session exists.

use thiserror::Error;

/// Grid access outside `0..cols` x `0..rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfRange { x: i32, y: i32 },
}

/// Rejected session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u16, cols: u16 },

    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("shape #{index} ({width}x{height}) does not fit a {cols}x{rows} grid")]
    ShapeTooLarge {
        index: usize,
        width: usize,
        height: usize,
        cols: u16,
        rows: u16,
    },

    #[error("shape mask rows have different lengths (row {row})")]
    RaggedShape { row: usize },

    #[error("shape mask has no occupied cells")]
    EmptyShape,

    #[error("prepared grid is {rows}x{cols}, configuration expects {expected_rows}x{expected_cols}")]
    GridMismatch {
        rows: usize,
        cols: usize,
        expected_rows: u16,
        expected_cols: u16,
    },
}
