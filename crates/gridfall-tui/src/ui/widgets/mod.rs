use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{board_display::*, cell_display::*, game_display::*};

mod board_display;
mod cell_display;
mod game_display;

pub(crate) mod color {
    use ratatui::style::Color;

    pub(crate) const CYAN: Color = Color::Rgb(0, 255, 255);
    pub(crate) const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub(crate) const GREEN: Color = Color::Rgb(0, 255, 0);
    pub(crate) const RED: Color = Color::Rgb(255, 0, 0);
    pub(crate) const BLUE: Color = Color::Rgb(0, 0, 255);
    pub(crate) const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub(crate) const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub(crate) const GRAY: Color = Color::Rgb(127, 127, 127);
    pub(crate) const BLACK: Color = Color::Rgb(0, 0, 0);
    pub(crate) const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub(crate) mod style {
    use gridfall_engine::ShapeColor;
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub(crate) const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub(crate) const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub(crate) const HELP: Style = fg_bg(color::GRAY, color::BLACK);

    pub(crate) const fn block(shape_color: ShapeColor) -> Style {
        bg_only(match shape_color {
            ShapeColor::Cyan => color::CYAN,
            ShapeColor::Yellow => color::YELLOW,
            ShapeColor::Green => color::GREEN,
            ShapeColor::Red => color::RED,
            ShapeColor::Blue => color::BLUE,
            ShapeColor::Orange => color::ORANGE,
            ShapeColor::Purple => color::MAGENTA,
        })
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

// Board dimensions are tiny, far below u16::MAX.
#[expect(clippy::cast_possible_truncation)]
const fn as_u16(value: usize) -> u16 {
    value as u16
}
