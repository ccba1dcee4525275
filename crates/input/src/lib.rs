//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm`
//! events into [`crate::types::Command`]s plus the few keys the shell handles
//! itself (quit, restart), and batches them per frame.

pub mod map;
pub mod queue;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, map_event, should_quit, should_restart, InputEvent};
pub use queue::{InputQueue, FRAME_EVENT_CAPACITY};
