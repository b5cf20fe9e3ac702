use super::{GRID_HEIGHT, GRID_WIDTH, piece::Piece, shape::Shape};
use crate::ShapeColor;

/// A single playfield cell: empty, or a settled block's color.
pub type Cell = Option<ShapeColor>;

#[expect(clippy::cast_possible_truncation)]
const WIDTH: i16 = GRID_WIDTH as i16;
#[expect(clippy::cast_possible_truncation)]
const HEIGHT: i16 = GRID_HEIGHT as i16;

/// The settled-block playfield: a fixed 10×20 matrix of cells.
///
/// Row 0 is the top. Dimensions never change; only cell contents differ
/// between snapshots. The grid is value-semantic: [`Grid::merged`] and
/// [`Grid::cleared`] produce new snapshots and leave their input untouched,
/// so callers commit a transition by replacing the old grid wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Grid {
    /// The all-empty playfield.
    pub const EMPTY: Self = Self {
        rows: [[None; GRID_WIDTH]; GRID_HEIGHT],
    };

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.rows.iter()
    }

    /// Checks whether `shape` can be placed with its top-left corner at
    /// `(x, y)`.
    ///
    /// Every occupied shape cell must fall inside the horizontal bounds and
    /// above the floor, and must map to an empty grid cell. Cells whose
    /// absolute row is negative are still above the visible board and are
    /// exempt from the occupancy check, which permits pieces to hang
    /// partially off the top at spawn. No side effects.
    #[must_use]
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.occupied_offsets().all(|(dx, dy)| {
            let col = i16::from(x) + i16::from(dx);
            let row = i16::from(y) + i16::from(dy);
            if col < 0 || col >= WIDTH || row >= HEIGHT {
                return false;
            }
            row < 0
                || self.rows[usize::from(row.unsigned_abs())][usize::from(col.unsigned_abs())]
                    .is_none()
        })
    }

    /// Returns a new grid with `piece`'s occupied cells baked in as settled
    /// blocks of its color.
    ///
    /// Only called once a downward move has been found invalid (the piece has
    /// landed). Occupied cells still above the board are not stored. The
    /// input grid is not mutated.
    #[must_use]
    pub fn merged(&self, piece: &Piece) -> Self {
        let mut next = self.clone();
        for (col, row) in piece.settled_cells() {
            next.rows[row][col] = Some(piece.color());
        }
        next
    }

    /// Removes every complete row and prepends that many empty rows at the
    /// top, preserving the relative order of surviving rows.
    ///
    /// A row is complete iff every cell in it is non-empty. Returns the new
    /// grid and the number of rows removed. Completeness is evaluated against
    /// this grid's state, so callers must merge a landed piece first.
    #[must_use]
    pub fn cleared(&self) -> (Self, usize) {
        let mut next = Self::EMPTY;
        let mut write = GRID_HEIGHT;
        for row in self.rows.iter().rev() {
            if Self::is_row_complete(row) {
                continue;
            }
            write -= 1;
            next.rows[write] = *row;
        }
        // Every skipped row left one empty slot at the top.
        (next, write)
    }

    fn is_row_complete(row: &[Cell; GRID_WIDTH]) -> bool {
        row.iter().all(Option::is_some)
    }

    /// Sets a single cell, for building test fixtures.
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}
