//! Session module - one game from first spawn to top-out
//!
//! The session owns the grid, the active piece and the randomness source. It
//! is the only thing that mutates them. Each tick or command runs to
//! completion:
//!
//! 1. If the session is over, the event is ignored.
//! 2. If row 0 holds any block, the session ends and the event is dropped.
//! 3. Otherwise the event is applied. A refused downward move (gravity or
//!    soft drop) runs the lock sequence: lock, clear full rows, spawn, and end
//!    the session if the new piece has no room or row 0 is occupied.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{Randomizer, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    /// Terminal. Only a new session starts another game.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    config: GameConfig,
    grid: Grid,
    piece: Piece,
    rng: R,
    /// Time accumulated toward the next gravity step
    fall_timer_ms: u32,
    state: SessionState,
    locked_pieces: u32,
    rows_cleared: u32,
}

impl<R: Randomizer> Session<R> {
    /// Start a game on an empty grid.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols);
        Ok(Self::start(config, grid, rng))
    }

    /// Start a game on a prepared grid. The grid must match the configured
    /// dimensions. The first spawn goes through the same top-out check as
    /// every later one.
    pub fn with_grid(config: GameConfig, grid: Grid, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.rows() != config.rows as usize || grid.cols() != config.cols as usize {
            return Err(ConfigError::GridMismatch {
                rows: grid.rows(),
                cols: grid.cols(),
                expected_rows: config.rows,
                expected_cols: config.cols,
            });
        }
        Ok(Self::start(config, grid, rng))
    }

    fn start(config: GameConfig, grid: Grid, mut rng: R) -> Self {
        let piece = Piece::random(&config.shapes, &config.palette, grid.cols(), &mut rng);
        let mut session = Self {
            config,
            grid,
            piece,
            rng,
            fall_timer_ms: 0,
            state: SessionState::Running,
            locked_pieces: 0,
            rows_cleared: 0,
        };
        if session.spawn_blocked() {
            session.state = SessionState::GameOver;
        }
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Pieces written into the grid so far
    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Rows removed so far
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Advance the fall clock. Returns true if a gravity step ran.
    ///
    /// At most one step runs per call; the accumulator restarts from zero
    /// whenever it fires.
    pub fn on_tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.begin_event() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.config.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a player command. Returns true if the piece moved or rotated.
    ///
    /// A soft drop that is blocked locks the piece and returns false.
    pub fn on_command(&mut self, command: Command) -> bool {
        if !self.begin_event() {
            return false;
        }

        match command {
            Command::Left => self.piece.try_move(&self.grid, -1, 0),
            Command::Right => self.piece.try_move(&self.grid, 1, 0),
            Command::SoftDrop => self.step_down(),
            Command::RotateCw => self.piece.rotate_clockwise(&self.grid),
        }
    }

    /// Copy the visible state into `out`, reusing its buffers.
    pub fn render_state_into(&self, out: &mut GameSnapshot) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        out.rows = rows;
        out.cols = cols;
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active.clear();
        out.active.extend(
            self.piece
                .cells()
                .filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows)
                .map(|(x, y)| (x as usize, y as usize)),
        );
        out.active_color = Some(self.piece.color());
        out.game_over = self.is_game_over();
    }

    pub fn render_state(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.render_state_into(&mut snap);
        snap
    }

    /// Top-row check that precedes every event.
    ///
    /// This looks at the grid only, not at whether the active piece could
    /// still move.
    fn begin_event(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.grid.row_has_blocks(0) {
            self.state = SessionState::GameOver;
            return false;
        }
        true
    }

    /// One row down, or lock if the floor/stack is in the way.
    fn step_down(&mut self) -> bool {
        if self.piece.try_move(&self.grid, 0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    fn lock_piece(&mut self) {
        if self.piece.lock(&mut self.grid).is_err() {
            // Part of the piece is above the grid: the stack reached the top.
            self.state = SessionState::GameOver;
            return;
        }
        self.locked_pieces = self.locked_pieces.wrapping_add(1);

        let cleared = self.grid.clear_full_rows();
        self.rows_cleared = self.rows_cleared.wrapping_add(cleared.len() as u32);

        self.piece = Piece::random(
            &self.config.shapes,
            &self.config.palette,
            self.grid.cols(),
            &mut self.rng,
        );
        if self.spawn_blocked() {
            self.state = SessionState::GameOver;
        }
    }

    fn spawn_blocked(&self) -> bool {
        self.piece.would_collide(&self.grid, 0, 0) || self.grid.row_has_blocks(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn session(seed: u32) -> Session {
        Session::new(GameConfig::default(), SimpleRng::new(seed)).unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = session(12345);
        assert_eq!(s.state(), SessionState::Running);
        assert_eq!(s.piece().y(), 0);
        assert_eq!(s.grid().occupied_count(), 0);
        assert_eq!(s.fall_timer_ms(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = Session::new(GameConfig::new(20, 10, 0), SimpleRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroFallInterval);
    }

    #[test]
    fn test_with_grid_dimension_mismatch() {
        let err = Session::with_grid(GameConfig::default(), Grid::new(10, 10), SimpleRng::new(1))
            .unwrap_err();
        assert!(matches!(err, ConfigError::GridMismatch { rows: 10, .. }));
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut s = session(1);
        assert!(!s.on_tick(300));
        assert_eq!(s.piece().y(), 0);
        assert_eq!(s.fall_timer_ms(), 300);

        assert!(s.on_tick(200));
        assert_eq!(s.piece().y(), 1);
        assert_eq!(s.fall_timer_ms(), 0);
    }

    #[test]
    fn test_large_elapsed_runs_one_step() {
        let mut s = session(1);
        assert!(s.on_tick(5000));
        assert_eq!(s.piece().y(), 1);
        assert_eq!(s.fall_timer_ms(), 0);
    }

    #[test]
    fn test_soft_drop_to_floor_locks_and_spawns() {
        let mut s = session(42);
        let color = s.piece().color();
        while s.on_command(Command::SoftDrop) {}

        assert_eq!(s.locked_pieces(), 1);
        assert_eq!(s.grid().occupied_count(), 4);
        assert!(s.grid().cells().iter().flatten().all(|&c| c == color));
        assert_eq!(s.piece().y(), 0);
        assert!(!s.is_game_over());
    }

    #[test]
    fn test_top_row_block_ends_session_before_moving() {
        let mut grid = Grid::new(20, 10);
        grid.set(0, 19, Color::RED).unwrap();
        let mut s = Session::with_grid(GameConfig::default(), grid, SimpleRng::new(3)).unwrap();
        assert!(!s.is_game_over());

        // Sneak a block into row 0 far from the piece.
        s.grid.set(9, 0, Color::RED).unwrap();
        let before = s.piece().clone();
        assert!(!s.on_command(Command::SoftDrop));
        assert!(s.is_game_over());
        assert_eq!(s.piece(), &before);
    }

    #[test]
    fn test_render_state_is_pure_read() {
        let s = session(9);
        let a = s.render_state();
        let b = s.render_state();
        assert_eq!(a, b);
        assert_eq!(a.rows, 20);
        assert_eq!(a.cols, 10);
        assert_eq!(a.active.len(), 4);
        assert_eq!(a.active_color, Some(s.piece().color()));
    }
}
