use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The terminal input stream ended or failed
    InputClosed,

    /// The first frame has been drawn
    Mounted,

    /// Tick for animation refresh
    Tick,
}
