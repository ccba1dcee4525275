//! Session configuration
//!
//! Every knob has a default matching the classic 10x20 field. Overrides are
//! applied at construction time and checked once by [`GameConfig::validate`].
//!
//! # Environment Variables
//!
//! [`GameConfig::from_env`] reads:
//!
//! - `BLOCKFALL_ROWS`: grid rows (default: 20)
//! - `BLOCKFALL_COLS`: grid columns (default: 10)
//! - `BLOCKFALL_FALL_MS`: gravity interval in ms (default: 500)
//!
//! Values that fail to parse fall back to the default.

use crate::error::ConfigError;
use crate::shapes::{default_catalog, Shape};
use crate::types::{Color, DEFAULT_COLS, DEFAULT_FALL_INTERVAL_MS, DEFAULT_PALETTE, DEFAULT_ROWS};

pub const ENV_ROWS: &str = "BLOCKFALL_ROWS";
pub const ENV_COLS: &str = "BLOCKFALL_COLS";
pub const ENV_FALL_MS: &str = "BLOCKFALL_FALL_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub fall_interval_ms: u32,
    pub palette: Vec<Color>,
    pub shapes: Vec<Shape>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            palette: DEFAULT_PALETTE.to_vec(),
            shapes: default_catalog(),
        }
    }
}

impl GameConfig {
    /// Default palette and catalog with custom dimensions and gravity.
    pub fn new(rows: u16, cols: u16, fall_interval_ms: u32) -> Self {
        Self {
            rows,
            cols,
            fall_interval_ms,
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            rows: parse_var(&lookup, ENV_ROWS).unwrap_or(defaults.rows),
            cols: parse_var(&lookup, ENV_COLS).unwrap_or(defaults.cols),
            fall_interval_ms: parse_var(&lookup, ENV_FALL_MS).unwrap_or(defaults.fall_interval_ms),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            if shape.width() > self.cols as usize || shape.height() > self.rows as usize {
                return Err(ConfigError::ShapeTooLarge {
                    index,
                    width: shape.width(),
                    height: shape.height(),
                    cols: self.cols,
                    rows: self.rows,
                });
            }
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
