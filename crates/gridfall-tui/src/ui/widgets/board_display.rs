use gridfall_engine::{Cell, GRID_HEIGHT, GRID_WIDTH, Grid, Piece};
use ratatui::{
    prelude::{Buffer, Rect},
    widgets::{Block, Widget},
};

use crate::ui::widgets::{CellDisplay, as_u16, block_horizontal_margin, block_vertical_margin};

/// Renders the playfield, with the falling piece overlaid on the settled
/// grid.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    grid: &'a Grid,
    falling: Option<&'a Piece>,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            falling: None,
            block: None,
        }
    }

    pub(crate) fn falling_piece(self, falling: Option<&'a Piece>) -> Self {
        Self { falling, ..self }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        as_u16(GRID_WIDTH) * CellDisplay::width() + block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        as_u16(GRID_HEIGHT) + block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = self.block.as_ref().map_or(area, |block| block.inner(area));
        if let Some(block) = &self.block {
            block.render(area, buf);
        }

        // Overlay the falling piece on a snapshot of the settled cells.
        // Piece rows still above the board are not part of the overlay.
        let mut cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT] = [[None; GRID_WIDTH]; GRID_HEIGHT];
        for (dst, src) in cells.iter_mut().zip(self.grid.rows()) {
            *dst = *src;
        }
        if let Some(piece) = self.falling {
            for (col, row) in piece.settled_cells() {
                cells[row][col] = Some(piece.color());
            }
        }

        for (y, row) in cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let cell_area = Rect::new(
                    inner.x + as_u16(x) * CellDisplay::width(),
                    inner.y + as_u16(y),
                    CellDisplay::width(),
                    1,
                )
                .intersection(inner);
                CellDisplay::from_cell(*cell).render(cell_area, buf);
            }
        }
    }
}
