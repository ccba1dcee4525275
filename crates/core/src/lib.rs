//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game: the grid, the falling piece, the
//! shape catalog and the session state machine. It has **no dependencies** on
//! terminals, clocks or global state, which keeps it:
//!
//! - **Deterministic**: randomness is injected, so a seed replays a game exactly
//! - **Testable**: every rule can be driven by plain method calls
//! - **Portable**: any shell that can feed ticks and draw cells can host it
//!
//! # Module Structure
//!
//! - [`shapes`]: shape masks and the default O/I/T/L/Z/S catalog
//! - [`grid`]: fixed-size playfield with occupancy and row clearing
//! - [`piece`]: the falling piece: movement, rotation, collision, locking
//! - [`rng`]: the [`Randomizer`] capability and a seeded LCG
//! - [`config`]: session configuration and environment overrides
//! - [`session`]: gravity, commands, spawning and top-out
//! - [`snapshot`]: the read model handed to renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row with a random shape and color
//! - Gravity moves the piece down one row every fall interval
//! - Rotation is clockwise only, in place, with no wall kicks
//! - A piece locks as soon as a downward move is refused
//! - Full rows are removed together; rows above drop into the gap
//! - The game ends when a new piece has no room or the top row is occupied
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameConfig, Session, SimpleRng};
//! use tui_blockfall_types::Command;
//!
//! let mut session = Session::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();
//!
//! session.on_command(Command::Left);
//! session.on_command(Command::RotateCw);
//! session.on_tick(500);
//!
//! assert!(!session.is_game_over());
//! assert_eq!(session.render_state().active.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use piece::Piece;
pub use rng::{Randomizer, SimpleRng};
pub use session::{Session, SessionState};
pub use shapes::{default_catalog, Shape};
pub use snapshot::{CellSink, GameSnapshot};
