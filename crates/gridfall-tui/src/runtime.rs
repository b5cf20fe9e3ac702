use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};
use ratatui::Frame;

use crate::event::TuiEvent;

/// Trait for applications driven by [`Runtime::run`].
pub(crate) trait App {
    /// Called once before the event loop starts. Use this to configure the
    /// initial tick interval.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances game logic by one tick.
    fn update(&mut self, runtime: &mut Runtime);
}

/// TUI event loop: interleaves gravity ticks, renders, and terminal input.
///
/// The tick interval is optional. While it is `None` no tick events are
/// produced at all, which is how the game suspends gravity during pause and
/// after game over. Renders are dirty-driven: any tick or terminal event
/// schedules one redraw.
#[derive(Debug)]
pub(crate) struct Runtime {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Runtime {
    pub(crate) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the tick interval, or disables ticks with `None`.
    ///
    /// Changing the interval restarts the countdown, so re-enabling ticks
    /// after a pause does not fire a burst of stale ticks.
    pub(crate) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if interval != self.tick_interval {
            self.tick_interval = interval;
            self.last_tick = Instant::now();
        }
    }

    /// Restarts the tick countdown from now.
    ///
    /// Needed when the game state is replaced while the interval stays the
    /// same, so a tick already due at that moment cannot fire into the new
    /// state.
    pub(crate) fn restart_tick(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Runs `app` until it asks to exit.
    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.next_event()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }

    /// Blocks until a tick is due, a redraw is pending, or a terminal event
    /// arrives.
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            // With no tick scheduled, block until the next terminal event.
            if let Some(timeout) = self.next_tick_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn next_tick_timeout(&self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        Some((self.last_tick + interval).saturating_duration_since(now))
    }
}
