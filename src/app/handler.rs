use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::content::{ACCEPT_LABEL, LETTER_BUTTON_LABEL};
use crate::ui::{celebration, layout, letter};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tracing::{debug, info};

const PAGE_SCROLL: i32 = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Mounted => {
            if state.proposal.mount(&mut rand::rng()) {
                debug!(
                    particles = state.proposal.decorations().particles().len(),
                    "decorations seeded"
                );
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::InputClosed => quit(state),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.dirty = true;
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(..) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(state);
    }

    match state.mode() {
        Mode::Asking => handle_asking_key(state, key),
        Mode::Celebrating => handle_celebration_key(state, key),
        Mode::Letter => handle_letter_key(state, key),
    }
}

fn handle_asking_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => accept(state),
        KeyCode::Char('n') | KeyCode::Char('N') => decline(state),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            state.focus = state.focus.toggle();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.focus {
            ButtonFocus::Accept => accept(state),
            ButtonFocus::Decline => decline(state),
        },
        KeyCode::Char('q') | KeyCode::Esc => quit(state),
        _ => vec![],
    }
}

fn handle_celebration_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char(' ') => open_letter(state),
        KeyCode::Up => scroll_sections(state, -1),
        KeyCode::Down => scroll_sections(state, 1),
        KeyCode::PageUp => scroll_sections(state, -PAGE_SCROLL),
        KeyCode::PageDown => scroll_sections(state, PAGE_SCROLL),
        KeyCode::Char('q') | KeyCode::Esc => quit(state),
        _ => vec![],
    }
}

fn handle_letter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => close_letter(state, "key"),
        KeyCode::Up => scroll_letter(state, -1),
        KeyCode::Down => scroll_letter(state, 1),
        KeyCode::PageUp => scroll_letter(state, -PAGE_SCROLL),
        KeyCode::PageDown => scroll_letter(state, PAGE_SCROLL),
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let pos = Position::new(mouse.column, mouse.row);
    let body = layout::compute_layout(state.viewport).body;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.dirty = true;
            match state.mode() {
                Mode::Asking => {
                    let intro = layout::intro_layout(
                        body,
                        state.proposal.accept_emphasis(),
                        ACCEPT_LABEL,
                        state.proposal.decline_label(),
                    );
                    if intro.accept_button.contains(pos) {
                        state.focus = ButtonFocus::Accept;
                        accept(state)
                    } else if intro.decline_button.contains(pos) {
                        state.focus = ButtonFocus::Decline;
                        decline(state)
                    } else {
                        vec![]
                    }
                }
                Mode::Celebrating => {
                    let celebration = layout::celebration_layout(body, LETTER_BUTTON_LABEL);
                    if celebration.letter_button.contains(pos) {
                        open_letter(state)
                    } else {
                        vec![]
                    }
                }
                Mode::Letter => {
                    if layout::letter_popup(state.viewport).contains(pos) {
                        vec![]
                    } else {
                        close_letter(state, "outside click")
                    }
                }
            }
        }
        MouseEventKind::ScrollUp => scroll_mode(state, -1),
        MouseEventKind::ScrollDown => scroll_mode(state, 1),
        _ => vec![],
    }
}

fn accept(state: &mut AppState) -> Vec<Action> {
    if state.proposal.accept(state.tick_count) {
        info!(
            declines = state.proposal.decline_attempts(),
            "proposal accepted"
        );
        state.sections_scroll = 0;
    }
    vec![]
}

fn decline(state: &mut AppState) -> Vec<Action> {
    let attempts = state.proposal.decline();
    info!(
        attempts,
        emphasis = state.proposal.accept_emphasis(),
        label = state.proposal.decline_label(),
        "proposal declined"
    );
    if state.config.behavior.bell_on_decline {
        vec![Action::Bell]
    } else {
        vec![]
    }
}

fn open_letter(state: &mut AppState) -> Vec<Action> {
    if state.proposal.open_letter() {
        info!("letter opened");
    }
    vec![]
}

fn close_letter(state: &mut AppState, via: &str) -> Vec<Action> {
    if state.proposal.close_letter() {
        info!(via, "letter closed");
    }
    vec![]
}

fn scroll_sections(state: &mut AppState, delta: i32) -> Vec<Action> {
    let body = layout::compute_layout(state.viewport).body;
    let secs = state.secs_since_accept().unwrap_or_default();
    let max = celebration::max_sections_scroll(body, secs);
    state.sections_scroll = i32::from(state.sections_scroll.min(max))
        .saturating_add(delta)
        .clamp(0, i32::from(max)) as u16;
    vec![]
}

fn scroll_letter(state: &mut AppState, delta: i32) -> Vec<Action> {
    let max = letter::max_letter_scroll(state.viewport);
    state.proposal.scroll_letter(delta, max);
    vec![]
}

fn scroll_mode(state: &mut AppState, delta: i32) -> Vec<Action> {
    state.dirty = true;
    match state.mode() {
        Mode::Asking => vec![],
        Mode::Celebrating => scroll_sections(state, delta),
        Mode::Letter => scroll_letter(state, delta),
    }
}

fn quit(state: &mut AppState) -> Vec<Action> {
    info!(
        accepted = state.proposal.is_accepted(),
        declines = state.proposal.decline_attempts(),
        "session ending"
    );
    vec![Action::Quit]
}
