//! Piece module - the falling piece
//!
//! A piece is a shape mask anchored at the top-left corner of its bounding
//! box, plus a color. Every mutation is checked against the grid first, so a
//! piece is never observed in an overlapping or out-of-bounds placement.

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::Randomizer;
use crate::shapes::Shape;
use crate::types::Color;

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    x: i32,
    y: i32,
    color: Color,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centered
    /// (`cols/2 - width/2`), top row.
    pub fn spawn(shape: Shape, color: Color, cols: usize) -> Self {
        let x = (cols / 2) as i32 - (shape.width() / 2) as i32;
        Self {
            shape,
            x,
            y: 0,
            color,
        }
    }

    /// Spawn a piece with shape and color drawn uniformly from `catalog` and
    /// `palette`. Both slices must be non-empty.
    pub fn random<R: Randomizer>(
        catalog: &[Shape],
        palette: &[Color],
        cols: usize,
        rng: &mut R,
    ) -> Self {
        let shape = catalog[rng.next_index(catalog.len())].clone();
        let color = palette[rng.next_index(palette.len())];
        Self::spawn(shape, color, cols)
    }

    /// Create a piece at an explicit anchor.
    pub fn at(shape: Shape, color: Color, x: i32, y: i32) -> Self {
        Self { shape, x, y, color }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(i, j)| (self.x + j as i32, self.y + i as i32))
    }

    /// Would `shape`, anchored at this piece's position shifted by (dx, dy),
    /// hit a wall, the floor, or a block?
    ///
    /// Cells above the grid (y < 0) only collide with the side walls.
    pub fn collides_with(&self, grid: &Grid, shape: &Shape, dx: i32, dy: i32) -> bool {
        let (cols, rows) = (grid.cols() as i32, grid.rows() as i32);
        shape.filled().any(|(i, j)| {
            let x = self.x + j as i32 + dx;
            let y = self.y + i as i32 + dy;
            x < 0 || x >= cols || y >= rows || (y >= 0 && grid.is_occupied(x, y).unwrap_or(true))
        })
    }

    /// Collision check for the current mask
    pub fn would_collide(&self, grid: &Grid, dx: i32, dy: i32) -> bool {
        self.collides_with(grid, &self.shape, dx, dy)
    }

    /// Translate by (dx, dy) if the target placement is free.
    ///
    /// Returns false and leaves the piece untouched when blocked.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        if self.would_collide(grid, dx, dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate 90° clockwise in place. No wall kicks: if the rotated mask does
    /// not fit at the current anchor, the piece keeps its old mask.
    pub fn rotate_clockwise(&mut self, grid: &Grid) -> bool {
        let candidate = self.shape.rotated_cw();
        if self.collides_with(grid, &candidate, 0, 0) {
            return false;
        }
        self.shape = candidate;
        true
    }

    /// Write every occupied cell into the grid with this piece's color.
    ///
    /// Callers lock only after a downward move was refused, so each target
    /// cell is inside the grid and empty. A cell above row 0 is reported as
    /// `OutOfRange`.
    pub fn lock(&self, grid: &mut Grid) -> Result<(), GridError> {
        // Check every cell first so a failed lock leaves the grid untouched.
        if let Some((x, y)) = self.cells().find(|&(x, y)| grid.get(x, y).is_none()) {
            return Err(GridError::OutOfRange { x, y });
        }
        for (x, y) in self.cells() {
            grid.set(x, y, self.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_spawn_centers_piece() {
        let o = Piece::spawn(Shape::of_kind(ShapeKind::O), Color::RED, 10);
        assert_eq!(o.position(), (4, 0));

        let t = Piece::spawn(Shape::of_kind(ShapeKind::T), Color::RED, 10);
        assert_eq!(t.position(), (4, 0));

        let i = Piece::spawn(Shape::of_kind(ShapeKind::I), Color::RED, 10);
        assert_eq!(i.position(), (5, 0));
    }

    #[test]
    fn test_cells_are_absolute() {
        let p = Piece::at(Shape::of_kind(ShapeKind::L), Color::BLUE, 2, 5);
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(2, 5), (2, 6), (2, 7), (3, 7)]);
    }

    #[test]
    fn test_cells_above_grid_only_hit_walls() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 0, Color::RED).unwrap();
        // I piece entirely above the top in column 1.
        let p = Piece::at(Shape::of_kind(ShapeKind::I), Color::RED, 1, -4);
        assert!(!p.would_collide(&grid, 0, 0));
        assert!(p.would_collide(&grid, 0, 1));
        assert!(p.would_collide(&grid, -2, 0));
    }

    #[test]
    fn test_blocked_rotation_keeps_mask() {
        let grid = Grid::new(20, 10);
        // Vertical I two columns from the right wall has no room to lie flat.
        let mut p = Piece::at(Shape::of_kind(ShapeKind::I), Color::RED, 8, 0);
        let before = p.clone();
        assert!(!p.rotate_clockwise(&grid));
        assert_eq!(p, before);
    }

    #[test]
    fn test_random_uses_injected_source() {
        struct Fixed(Vec<usize>);
        impl Randomizer for Fixed {
            fn next_index(&mut self, _len: usize) -> usize {
                self.0.remove(0)
            }
        }

        let catalog = crate::shapes::default_catalog();
        let palette = crate::types::DEFAULT_PALETTE;
        let mut rng = Fixed(vec![2, 3]);
        let p = Piece::random(&catalog, &palette, 10, &mut rng);
        assert_eq!(p.shape(), &Shape::of_kind(ShapeKind::T));
        assert_eq!(p.color(), Color::YELLOW);
    }
}
