//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the input mapper and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! The default playfield matches a 300x600 window split into 30px cells:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! Both are overridable per session.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Shell frame period (~60 FPS) |
//! | `DEFAULT_FALL_INTERVAL_MS` | 500 | Gravity interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{ShapeKind, DEFAULT_COLS, DEFAULT_PALETTE, DEFAULT_ROWS};
//!
//! assert_eq!(ShapeKind::ALL.len(), 6);
//! assert_eq!(DEFAULT_PALETTE.len(), 4);
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default grid height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = 20;

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Default gravity interval in milliseconds
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 500;

/// Shell frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Opaque 24-bit cell color.
///
/// The engine only cares whether a cell holds a color or not; the value itself
/// is carried through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default piece palette: red, green, blue, yellow.
pub const DEFAULT_PALETTE: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];

/// A cell of the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied cell, colored by the piece that locked there
pub type Cell = Option<Color>;

/// Named entries of the default shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    I,
    T,
    L,
    Z,
    S,
}

impl ShapeKind {
    /// All catalog kinds, in catalog order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::Z,
        ShapeKind::S,
    ];
}

/// Player commands understood by a session.
///
/// Blocked commands are silently absorbed by the engine; they never produce
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Move piece one cell down; locks it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise in place
    RotateCw,
}
