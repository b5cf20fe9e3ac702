use arrayvec::ArrayVec;

/// Maximum side length of a shape's occupancy matrix.
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Color tag paired with each catalog shape.
///
/// The engine treats colors as opaque markers; front ends map them to
/// whatever palette they render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeColor {
    Cyan,
    Yellow,
    Green,
    Red,
    Blue,
    Orange,
    Purple,
}

/// A piece geometry: a 2-D boolean occupancy matrix.
///
/// Rows are stored top to bottom, cells left to right; `true` marks an
/// occupied cell. Shapes are immutable values: [`Shape::rotated_cw`] returns
/// a new matrix and never touches the original, so catalog entries stay
/// pristine no matter how often pieces derived from them are rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Builds a shape from a rectangular row pattern.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is empty, ragged, or exceeds
    /// [`MAX_SHAPE_DIM`] in either dimension. Catalog entries are the only
    /// callers, so a violation is a programming error.
    pub(crate) fn from_pattern(pattern: &[&[bool]]) -> Self {
        assert!(!pattern.is_empty() && pattern.len() <= MAX_SHAPE_DIM);
        let width = pattern[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM);
        let rows = pattern
            .iter()
            .map(|row| {
                assert_eq!(row.len(), width);
                row.iter().copied().collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of columns in the occupancy matrix.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows in the occupancy matrix.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the `(col, row)` offsets of occupied cells.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &occupied)| occupied)
                .map(move |(col, _)| (as_coord(col), as_coord(row)))
        })
    }

    /// Returns this shape rotated 90° clockwise.
    ///
    /// Implemented as transpose-then-reverse-each-row, so an `r`×`c` matrix
    /// becomes `c`×`r`. Always allocates a fresh matrix.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let rows = (0..self.width())
            .map(|col| self.rows.iter().rev().map(|row| row[col]).collect())
            .collect();
        Self { rows }
    }
}

// Offsets are bounded by MAX_SHAPE_DIM, far below i8::MAX.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn as_coord(value: usize) -> i8 {
    value as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: bool = true;
    const E: bool = false;

    #[test]
    fn test_from_pattern_dimensions() {
        let shape = Shape::from_pattern(&[&[C, C, C, C]]);
        assert_eq!(shape.width(), 4);
        assert_eq!(shape.height(), 1);

        let shape = Shape::from_pattern(&[&[E, C, E], &[C, C, C]]);
        assert_eq!(shape.width(), 3);
        assert_eq!(shape.height(), 2);
    }

    #[test]
    fn test_occupied_offsets() {
        let shape = Shape::from_pattern(&[&[E, C, E], &[C, C, C]]);
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let bar = Shape::from_pattern(&[&[C, C, C, C]]);
        let rotated = bar.rotated_cw();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
        let offsets: Vec<_> = rotated.occupied_offsets().collect();
        assert_eq!(offsets, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_rotate_t_shape() {
        // T pointing up rotates to T pointing right.
        let t = Shape::from_pattern(&[&[E, C, E], &[C, C, C]]);
        let rotated = t.rotated_cw();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        let offsets: Vec<_> = rotated.occupied_offsets().collect();
        assert_eq!(offsets, vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_rotate_does_not_mutate_original() {
        let original = Shape::from_pattern(&[&[C, C, E], &[E, C, C]]);
        let copy = original.clone();
        let _ = original.rotated_cw();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        let shape = Shape::from_pattern(&[&[C, E, E], &[C, C, C]]);
        let full_turn = shape
            .rotated_cw()
            .rotated_cw()
            .rotated_cw()
            .rotated_cw();
        assert_eq!(full_turn, shape);
    }

    #[test]
    fn test_rotate_square_is_identity() {
        let square = Shape::from_pattern(&[&[C, C], &[C, C]]);
        assert_eq!(square.rotated_cw(), square);
    }
}
