use crate::app::state::{AppState, Mode};
use crate::content::{
    Section, CELEBRATION_ICON, CELEBRATION_SUBTITLE, CELEBRATION_TITLE, LETTER_BUTTON_CAPTION,
    LETTER_BUTTON_LABEL, SECTIONS, SECTION_REVEAL_STAGGER_SECS,
};
use crate::ui::intro::render_button;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Number of memory sections revealed `secs` after acceptance.
pub fn revealed_sections(secs: f64) -> usize {
    if secs < 0.0 {
        return 0;
    }
    let shown = (secs / SECTION_REVEAL_STAGGER_SECS).floor() as usize + 1;
    shown.min(SECTIONS.len())
}

/// Wrapped text of every section revealed `secs` after acceptance.
fn sections_text(secs: f64) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = SECTIONS
        .iter()
        .take(revealed_sections(secs))
        .flat_map(section_lines)
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Furthest the sections column in `body` can scroll while its last
/// revealed line stays in view.
pub fn max_sections_scroll(body: Rect, secs: f64) -> u16 {
    let sections = layout::celebration_layout(body, LETTER_BUTTON_LABEL).sections;
    if sections.is_empty() {
        return 0;
    }
    let rows = sections_text(secs).line_count(sections.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(sections.height)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let celebration = layout::celebration_layout(area, LETTER_BUTTON_LABEL);
    let secs = state.secs_since_accept().unwrap_or_default();

    // The heart bobs on a two second cycle.
    let bob = (secs as u64) % 2 == 1;
    let mut header = vec![
        Line::from(CELEBRATION_ICON),
        Line::from(Span::styled(CELEBRATION_TITLE, Theme::title())),
        Line::from(Span::styled(CELEBRATION_SUBTITLE, Theme::accent())),
    ];
    if !bob {
        header.insert(0, Line::default());
    }
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        celebration.header,
    );

    let scroll = state.sections_scroll.min(max_sections_scroll(area, secs));
    frame.render_widget(
        sections_text(secs).scroll((scroll, 0)),
        celebration.sections,
    );

    render_button(
        frame,
        celebration.letter_button,
        LETTER_BUTTON_LABEL,
        Theme::accept_button(),
        state.mode() == Mode::Celebrating,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(LETTER_BUTTON_CAPTION, Theme::muted()))
            .alignment(Alignment::Center),
        celebration.caption,
    );
}

fn section_lines(section: &Section) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(section.icon, Theme::accent()),
        Span::raw(" "),
        Span::styled(section.title, Theme::heading()),
    ])];
    for path in section.images {
        lines.push(Line::from(Span::styled(
            format!("  [photo: {}]", path),
            Theme::photo(),
        )));
    }
    lines.push(Line::from(Span::styled(section.description, Theme::body_text())));
    lines.push(Line::default());
    lines
}
