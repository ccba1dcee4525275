//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders into a plain
//! framebuffer that is then flushed to the terminal, instead of going through
//! a widget toolkit.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Draw the board through the same cell interface any other backend would use
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
