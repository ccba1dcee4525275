//! Shapes module - piece masks and the default catalog
//!
//! A [`Shape`] is an immutable rectangular boolean mask, stored row-major.
//! Rotation never mutates a mask; [`Shape::rotated_cw`] builds a new one.

use crate::error::ConfigError;
use crate::types::ShapeKind;

/// Rectangular cell mask (H rows x W columns)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    /// Row-major occupancy (i * width + j)
    cells: Vec<bool>,
}

const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const I_ROWS: &[&[u8]] = &[&[1], &[1], &[1], &[1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[1, 0], &[1, 0], &[1, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// Raw rows for a catalog entry
fn kind_rows(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::O => O_ROWS,
        ShapeKind::I => I_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::S => S_ROWS,
    }
}

impl Shape {
    /// Build a mask from rows of 0/1 values.
    ///
    /// Rows must be non-empty, equally long, and at least one cell must be set.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 {
            return Err(ConfigError::EmptyShape);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(ConfigError::RaggedShape { row });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }

        if !cells.iter().any(|&c| c) {
            return Err(ConfigError::EmptyShape);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Catalog mask for a named kind
    pub fn of_kind(kind: ShapeKind) -> Self {
        let rows = kind_rows(kind);
        let width = rows[0].len();
        Self {
            width,
            height: rows.len(),
            cells: rows.iter().flat_map(|r| r.iter().map(|&v| v != 0)).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupied cells as `(i, j)` = (row, column) offsets from the anchor
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(idx, _)| (idx / self.width, idx % self.width))
    }

    /// 90° clockwise rotation: `new[i][j] = old[H-1-j][i]`, H x W becomes W x H.
    pub fn rotated_cw(&self) -> Self {
        let (h, w) = (self.height, self.width);
        let mut cells = Vec::with_capacity(self.cells.len());
        for i in 0..w {
            for j in 0..h {
                cells.push(self.cells[(h - 1 - j) * w + i]);
            }
        }
        Self {
            width: h,
            height: w,
            cells,
        }
    }
}

/// The default six-shape catalog (O, I, T, L, Z, S)
pub fn default_catalog() -> Vec<Shape> {
    ShapeKind::ALL.iter().map(|&k| Shape::of_kind(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_tetrominoes() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        for shape in &catalog {
            assert_eq!(shape.filled().count(), 4);
        }
    }

    #[test]
    fn test_t_rotation_cw() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let t = Shape::of_kind(ShapeKind::T);
        let r = t.rotated_cw();
        assert_eq!((r.height(), r.width()), (3, 2));
        let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]).unwrap();
        assert_eq!(r, expected);
    }

    #[test]
    fn test_i_rotation_becomes_horizontal() {
        let r = Shape::of_kind(ShapeKind::I).rotated_cw();
        assert_eq!((r.height(), r.width()), (1, 4));
        assert_eq!(r.filled().count(), 4);
    }

    #[test]
    fn test_rotation_does_not_touch_source() {
        let l = Shape::of_kind(ShapeKind::L);
        let before = l.clone();
        let _ = l.rotated_cw();
        assert_eq!(l, before);
    }

    #[test]
    fn test_from_rows_rejects_bad_masks() {
        assert_eq!(Shape::from_rows(&[]), Err(ConfigError::EmptyShape));
        assert_eq!(Shape::from_rows(&[&[0, 0]]), Err(ConfigError::EmptyShape));
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1]]),
            Err(ConfigError::RaggedShape { row: 1 })
        );
    }

    #[test]
    fn test_filled_offsets_are_row_column() {
        let l = Shape::of_kind(ShapeKind::L);
        let cells: Vec<_> = l.filled().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
    }
}
