use gridfall_engine::{Game, Phase};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::ui::widgets::{BoardDisplay, color, style};

const SCORE_PANEL_WIDTH: u16 = 13;

/// Renders a whole game: board, score panel, and phase popup.
#[derive(Debug)]
pub(crate) struct GameDisplay<'a> {
    game: &'a Game,
}

impl<'a> GameDisplay<'a> {
    pub(crate) fn new(game: &'a Game) -> Self {
        Self { game }
    }

    pub(crate) fn height(&self) -> u16 {
        self.board().height()
    }

    fn board(&self) -> BoardDisplay<'a> {
        let border_style = match self.game.phase() {
            Phase::Active => color::WHITE,
            Phase::Paused => color::YELLOW,
            Phase::GameOver => color::RED,
        };
        BoardDisplay::new(self.game.grid())
            .falling_piece(self.game.falling_piece())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            )
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let board = self.board();
        let board_width = board.width();

        let score_panel = {
            let text = Text::from(vec![
                Line::from("SCORE").centered(),
                Line::from(self.game.score().to_string()).centered(),
                Line::from("LINES").centered(),
                Line::from(self.game.lines_cleared().to_string()).centered(),
            ]);
            Paragraph::new(text).block(Block::bordered().style(style::DEFAULT))
        };

        let [board_column, panel_column] = Layout::horizontal([
            Constraint::Length(board_width),
            Constraint::Length(SCORE_PANEL_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let [panel_area] = Layout::vertical([Constraint::Length(6)]).areas(panel_column);

        board.render(board_area, buf);
        score_panel.render(panel_area, buf);

        let popup = match self.game.phase() {
            Phase::Active => None,
            Phase::Paused => Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW))),
            Phase::GameOver => Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED))),
        };

        if let Some((text, popup_style)) = popup {
            let block = Block::new().style(popup_style);
            let text = Text::styled(text, popup_style).centered();
            let popup_area =
                board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(popup_area);
            Clear.render(popup_area, buf);
            block.render(popup_area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
