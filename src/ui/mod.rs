pub mod celebration;
mod intro;
pub mod layout;
pub mod letter;
mod particles;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Mode};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    match state.mode() {
        Mode::Asking => intro::render(frame, app_layout.body, state),
        Mode::Celebrating | Mode::Letter => celebration::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlay last so it sits on top
    letter::render(frame, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn intro_asks_the_question() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("Will you be my Valentine?"));
        assert!(screen.contains("Are you sure?"));
        assert!(screen.contains("Made with love for Fifi"));
    }

    #[test]
    fn intro_shows_the_escalated_label() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..5 {
            state.proposal.decline();
        }
        let screen = draw(&state);
        assert!(screen.contains("Don't be shy!"));
        assert!(!screen.contains("Are you sure?"));
    }

    #[test]
    fn celebration_replaces_the_question() {
        let mut state = AppState::new(AppConfig::default());
        state.proposal.accept(0);
        state.tick_count = 100;
        let screen = draw(&state);
        assert!(screen.contains("She Said Yes!"));
        assert!(screen.contains("Read Your Letter"));
        assert!(screen.contains("When I first Saw You"));
        assert!(!screen.contains("Will you be my Valentine?"));
    }

    #[test]
    fn letter_overlays_the_celebration() {
        let config = AppConfig {
            recipient: "Robin".into(),
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state.proposal.accept(0);
        state.proposal.open_letter();
        let screen = draw(&state);
        assert!(screen.contains("My Dearest Robin"));
        assert!(screen.contains("Five years of watching you"));

        state.proposal.close_letter();
        let screen = draw(&state);
        assert!(!screen.contains("My Dearest Robin"));
    }

    #[test]
    fn reopened_letter_draws_the_same_frame() {
        let mut state = AppState::new(AppConfig::default());
        state.proposal.accept(0);
        state.tick_count = 100;
        state.proposal.open_letter();
        let first = draw(&state);

        state.proposal.scroll_letter(3, u16::MAX);
        state.proposal.close_letter();
        state.proposal.open_letter();
        let second = draw(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn letter_scrolled_past_the_end_still_shows_text() {
        let mut state = AppState::new(AppConfig::default());
        state.proposal.accept(0);
        state.proposal.open_letter();
        state.proposal.scroll_letter(i32::from(u16::MAX), u16::MAX);
        let screen = draw(&state);
        assert!(screen.contains("Forever Yours"));
    }

    #[test]
    fn renders_on_a_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        let mut state = AppState::new(AppConfig::default());
        state.proposal.mount(&mut rand::rng());
        terminal.draw(|f| render(f, &state)).unwrap();
        for _ in 0..6 {
            state.proposal.decline();
        }
        terminal.draw(|f| render(f, &state)).unwrap();
        state.proposal.accept(0);
        state.proposal.open_letter();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
