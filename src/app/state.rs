use crate::app::proposal::{Proposal, Screen};
use crate::config::AppConfig;
use ratatui::layout::Rect;

/// Which of the two intro buttons has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFocus {
    Accept,
    Decline,
}

impl ButtonFocus {
    pub fn toggle(self) -> Self {
        match self {
            ButtonFocus::Accept => ButtonFocus::Decline,
            ButtonFocus::Decline => ButtonFocus::Accept,
        }
    }
}

/// Flattened view of the proposal screen, used to route input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Asking,
    Celebrating,
    Letter,
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub proposal: Proposal,
    pub focus: ButtonFocus,
    pub sections_scroll: u16,
    /// Area of the last drawn frame, for mouse hit-testing.
    pub viewport: Rect,
    pub tick_count: u64,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            proposal: Proposal::new(),
            focus: ButtonFocus::Accept,
            sections_scroll: 0,
            viewport: Rect::default(),
            tick_count: 0,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        if !self.proposal.is_accepted() {
            Mode::Asking
        } else if self.proposal.letter_visible() {
            Mode::Letter
        } else {
            Mode::Celebrating
        }
    }

    /// Seconds of animation time since startup.
    pub fn elapsed_secs(&self) -> f64 {
        self.ticks_to_secs(self.tick_count)
    }

    /// Seconds of animation time since the proposal was accepted.
    pub fn secs_since_accept(&self) -> Option<f64> {
        match self.proposal.screen() {
            Screen::Asking => None,
            Screen::Celebrating(c) => {
                Some(self.ticks_to_secs(self.tick_count.saturating_sub(c.accepted_at())))
            }
        }
    }

    fn ticks_to_secs(&self, ticks: u64) -> f64 {
        ticks as f64 * self.config.ui.tick_rate_ms as f64 / 1000.0
    }
}
