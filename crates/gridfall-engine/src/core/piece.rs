use super::shape::{Shape, ShapeColor};

/// The falling piece: a shape plus its position on the playfield.
///
/// `(x, y)` is the grid position of the shape matrix's top-left corner.
/// `y` may be negative while a freshly spawned piece still hangs above the
/// visible board. Transforms return candidate pieces; the caller validates a
/// candidate against the grid and commits it only if it fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    color: ShapeColor,
    x: i8,
    y: i8,
}

impl Piece {
    #[must_use]
    pub fn new(shape: Shape, color: ShapeColor, x: i8, y: i8) -> Self {
        Self { shape, color, x, y }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn color(&self) -> ShapeColor {
        self.color
    }

    #[must_use]
    pub fn x(&self) -> i8 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i8 {
        self.y
    }

    /// Returns a candidate piece translated by `(dx, dy)`.
    #[must_use]
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self.clone()
        }
    }

    /// Returns a candidate piece rotated 90° clockwise around its top-left
    /// corner. The position is unchanged.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }

    /// Returns the absolute `(col, row)` grid cells this piece occupies,
    /// skipping cells that are still above the board.
    ///
    /// Callers must have validated the piece against the grid, so every
    /// yielded cell is in bounds.
    pub fn settled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.occupied_offsets().filter_map(|(dx, dy)| {
            let col = i16::from(self.x) + i16::from(dx);
            let row = i16::from(self.y) + i16::from(dy);
            (row >= 0).then(|| (usize::from(col.unsigned_abs()), usize::from(row.unsigned_abs())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: bool = true;
    const E: bool = false;

    fn t_piece() -> Piece {
        let shape = Shape::from_pattern(&[&[E, C, E], &[C, C, C]]);
        Piece::new(shape, ShapeColor::Purple, 4, 10)
    }

    #[test]
    fn test_moved_translates_candidate() {
        let piece = t_piece();
        let moved = piece.moved(-1, 1);
        assert_eq!((moved.x(), moved.y()), (3, 11));
        // The source piece is untouched.
        assert_eq!((piece.x(), piece.y()), (4, 10));
        assert_eq!(moved.shape(), piece.shape());
    }

    #[test]
    fn test_rotated_keeps_position() {
        let piece = t_piece();
        let rotated = piece.rotated();
        assert_eq!((rotated.x(), rotated.y()), (4, 10));
        assert_eq!(rotated.shape().width(), 2);
        assert_eq!(rotated.shape().height(), 3);
        assert_eq!(piece.shape().width(), 3);
    }

    #[test]
    fn test_settled_cells_absolute_positions() {
        let cells: Vec<_> = t_piece().settled_cells().collect();
        assert_eq!(cells, vec![(5, 10), (4, 11), (5, 11), (6, 11)]);
    }

    #[test]
    fn test_settled_cells_skip_rows_above_board() {
        let shape = Shape::from_pattern(&[&[C, C], &[C, C]]);
        let piece = Piece::new(shape, ShapeColor::Yellow, 4, -1);
        let cells: Vec<_> = piece.settled_cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0)]);
    }
}
