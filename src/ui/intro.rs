use crate::app::state::{AppState, ButtonFocus};
use crate::content::{ACCEPT_LABEL, QUESTION, SPARKLES};
use crate::ui::layout;
use crate::ui::particles;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    particles::render(frame, area, state);

    let proposal = &state.proposal;
    let intro = layout::intro_layout(
        area,
        proposal.accept_emphasis(),
        ACCEPT_LABEL,
        proposal.decline_label(),
    );

    // Name and heart pulse on alternate seconds.
    let pulse = (state.elapsed_secs() as u64) % 2 == 0;
    let mut title_style = Theme::title();
    if pulse {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }
    let title = Line::from(vec![
        Span::styled(state.config.recipient.clone(), title_style),
        Span::raw(" "),
        Span::raw("💕"),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), intro.title);

    frame.render_widget(
        Paragraph::new(Span::styled(QUESTION, Theme::question())).alignment(Alignment::Center),
        intro.question,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SPARKLES, Theme::accent())).alignment(Alignment::Center),
        intro.sparkles,
    );

    render_button(
        frame,
        intro.accept_button,
        ACCEPT_LABEL,
        Theme::accept_button(),
        state.focus == ButtonFocus::Accept,
    );
    render_button(
        frame,
        intro.decline_button,
        proposal.decline_label(),
        Theme::decline_button(),
        state.focus == ButtonFocus::Decline,
    );
}

/// Bordered button with its label centered in both directions.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style, focused: bool) {
    if area.is_empty() {
        return;
    }
    let border_style = if focused {
        Theme::button_border_focused()
    } else {
        Theme::button_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .style(style);
    let inner = block.inner(area);

    let pad = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::default()).collect();
    let label_style = if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    lines.push(Line::from(Span::styled(label.to_string(), label_style)));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
