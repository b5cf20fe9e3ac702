use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use gridfall_engine::{Game, Phase};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};

use crate::{
    runtime::{App, Runtime},
    ui::widgets::{GameDisplay, style},
};

/// The interactive game application.
///
/// Gravity is driven by runtime ticks. The tick interval is re-synced with
/// the game phase after every event, so gravity stops the moment the game
/// pauses or ends and resumes cleanly on unpause.
#[derive(Debug)]
pub(crate) struct PlayApp {
    game: Game,
    gravity: Duration,
    exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(game: Game, gravity: Duration) -> Self {
        Self {
            game,
            gravity,
            exiting: false,
        }
    }

    fn sync_gravity(&self, runtime: &mut Runtime) {
        let interval = self.game.phase().is_active().then_some(self.gravity);
        runtime.set_tick_interval(interval);
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        self.sync_gravity(runtime);
    }

    fn should_exit(&self) -> bool {
        self.exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let is_active = self.game.phase().is_active();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_active => _ = self.game.request_move(-1, 0),
                KeyCode::Right if is_active => _ = self.game.request_move(1, 0),
                KeyCode::Down if is_active => _ = self.game.request_move(0, 1),
                KeyCode::Up if is_active => _ = self.game.request_rotate(),
                KeyCode::Char('p') => _ = self.game.toggle_pause(),
                KeyCode::Char('r') => {
                    self.game.reset();
                    // The interval may be unchanged across a mid-game reset;
                    // a tick already due must not drop the fresh piece.
                    runtime.restart_tick();
                }
                KeyCode::Char('q') => self.exiting = true,
                _ => {}
            }
        }
        self.sync_gravity(runtime);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        _ = self.game.request_move(0, 1);
        self.sync_gravity(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        let display = GameDisplay::new(&self.game);
        let help_text = match self.game.phase() {
            Phase::Active => {
                "Controls: ← → (Move) | ↓ (Drop) | ↑ (Rotate) | P (Pause) | R (Restart) | Q (Quit)"
            }
            Phase::Paused => "Controls: P (Resume) | R (Restart) | Q (Quit)",
            Phase::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(display.height()),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        frame.render_widget(&display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
