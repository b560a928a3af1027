//! The proposal itself.
//!
//! Two screens, one way through: `Asking` can become `Celebrating` and
//! nothing goes back. A `Celebration` can only be built by accepting, so no
//! code outside this module can forge or undo one. Declining is allowed any
//! number of times and never ends the flow.

use crate::app::decoration::Decorations;
use crate::content::DECLINE_PHRASES;
use rand::RngExt;

/// Emphasis gained by the affirmative button per decline.
pub const EMPHASIS_STEP: f64 = 0.5;
pub const MAX_EMPHASIS: f64 = 5.0;

/// Scale of the affirmative button after `attempts` declines.
pub fn emphasis_for(attempts: u32) -> f64 {
    (1.0 + EMPHASIS_STEP * f64::from(attempts)).min(MAX_EMPHASIS)
}

/// Negative button label after `attempts` declines. Holds on the last
/// phrase once the list runs out.
pub fn decline_phrase(attempts: u32) -> &'static str {
    let last = DECLINE_PHRASES.len() - 1;
    let index = usize::try_from(attempts).map_or(last, |n| n.min(last));
    DECLINE_PHRASES[index]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    Hidden,
    Shown { scroll: u16 },
}

impl Letter {
    pub fn is_shown(&self) -> bool {
        matches!(self, Letter::Shown { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    accepted_at: u64,
    letter: Letter,
}

impl Celebration {
    fn new(accepted_at: u64) -> Self {
        Self {
            accepted_at,
            letter: Letter::Hidden,
        }
    }

    /// Tick at which the proposal was accepted.
    pub fn accepted_at(&self) -> u64 {
        self.accepted_at
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Asking,
    Celebrating(Celebration),
}

#[derive(Debug)]
pub struct Proposal {
    screen: Screen,
    decline_attempts: u32,
    decorations: Decorations,
}

impl Default for Proposal {
    fn default() -> Self {
        Self::new()
    }
}

impl Proposal {
    pub fn new() -> Self {
        Self {
            screen: Screen::Asking,
            decline_attempts: 0,
            decorations: Decorations::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.screen, Screen::Celebrating(_))
    }

    pub fn decline_attempts(&self) -> u32 {
        self.decline_attempts
    }

    pub fn accept_emphasis(&self) -> f64 {
        emphasis_for(self.decline_attempts)
    }

    pub fn decline_label(&self) -> &'static str {
        decline_phrase(self.decline_attempts)
    }

    pub fn letter(&self) -> Letter {
        match &self.screen {
            Screen::Asking => Letter::Hidden,
            Screen::Celebrating(c) => c.letter,
        }
    }

    pub fn letter_visible(&self) -> bool {
        self.letter().is_shown()
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// Post-mount hook: rolls the decoration set the first time only.
    pub fn mount<R: RngExt>(&mut self, rng: &mut R) -> bool {
        self.decorations.seed(rng)
    }

    /// Move to the celebration. Returns `false` if already there.
    pub fn accept(&mut self, tick: u64) -> bool {
        if self.is_accepted() {
            return false;
        }
        self.screen = Screen::Celebrating(Celebration::new(tick));
        true
    }

    /// Count one more decline and return the new total.
    pub fn decline(&mut self) -> u32 {
        self.decline_attempts = self.decline_attempts.saturating_add(1);
        self.decline_attempts
    }

    /// Show the letter. No-op before acceptance or while already shown.
    /// Every open starts at the top of the letter.
    pub fn open_letter(&mut self) -> bool {
        match &mut self.screen {
            Screen::Celebrating(c) if !c.letter.is_shown() => {
                c.letter = Letter::Shown { scroll: 0 };
                true
            }
            _ => false,
        }
    }

    pub fn close_letter(&mut self) -> bool {
        match &mut self.screen {
            Screen::Celebrating(c) if c.letter.is_shown() => {
                c.letter = Letter::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Move the letter view by `delta` rows, kept within `0..=max`.
    pub fn scroll_letter(&mut self, delta: i32, max: u16) -> bool {
        let Screen::Celebrating(c) = &mut self.screen else {
            return false;
        };
        let Letter::Shown { scroll } = &mut c.letter else {
            return false;
        };
        let next = i32::from(*scroll)
            .saturating_add(delta)
            .clamp(0, i32::from(max)) as u16;
        let changed = next != *scroll;
        *scroll = next;
        changed
    }
}
