use crate::app::state::{AppState, Mode};
use crate::content::footer_text;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Asking => "y yes  n no  ←→ focus  Enter choose  q quit",
        Mode::Celebrating => "Enter/l read letter  ↑↓ scroll  q quit",
        Mode::Letter => "Esc close  ↑↓ scroll",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = format!(" {} ", footer_text(&state.config.recipient));
    let hints = format!(" {} ", key_hints(state.mode()));

    // Pad to fill remaining space
    let used = footer.width() + hints.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(footer, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(hints, Theme::status_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
