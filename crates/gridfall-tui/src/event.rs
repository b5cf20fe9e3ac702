use crossterm::event::Event as CrosstermEvent;

/// Events dispatched by the runtime to the application.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(crate) enum TuiEvent {
    /// Gravity update timing (based on the tick interval).
    Tick,
    /// Screen render timing.
    Render,
    /// Terminal events such as key input and resize.
    Crossterm(CrosstermEvent),
}
