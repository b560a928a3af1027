use crate::app::proposal::Letter;
use crate::app::state::AppState;
use crate::content::{
    letter_title, LETTER_HEARTS, LETTER_INTRO, LETTER_PARAGRAPHS, LETTER_SIGNATURE,
    LETTER_SIGN_OFF,
};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// The whole letter body. Identical on every open.
pub fn letter_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(LETTER_INTRO, Theme::letter_intro())),
        Line::default(),
    ];

    let last = LETTER_PARAGRAPHS.len() - 1;
    for (i, paragraph) in LETTER_PARAGRAPHS.iter().enumerate() {
        let style = if i == last {
            Theme::letter_emphasis()
        } else {
            Theme::body_text()
        };
        lines.push(Line::from(Span::styled(*paragraph, style)));
        lines.push(Line::default());
    }

    lines.push(Line::from("💕".repeat(LETTER_HEARTS)).alignment(Alignment::Center));
    lines.push(
        Line::from(Span::styled(LETTER_SIGN_OFF, Theme::title())).alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(LETTER_SIGNATURE, Theme::accent())).alignment(Alignment::Center),
    );
    lines
}

/// Furthest the letter can scroll inside the popup for `area` while its
/// last line stays in view.
pub fn max_letter_scroll(area: Rect) -> u16 {
    let popup = layout::letter_popup(area);
    let inner = popup.inner(Margin::new(1, 1));
    if inner.is_empty() {
        return 0;
    }
    let rows = Paragraph::new(letter_lines())
        .wrap(Wrap { trim: true })
        .line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let Letter::Shown { scroll } = state.proposal.letter() else {
        return;
    };

    let popup_area = layout::letter_popup(frame.area());
    if popup_area.is_empty() {
        return;
    }

    // Clear background
    frame.render_widget(Clear, popup_area);

    // Hearts on either side of the title rock with the animation clock.
    let rock = (state.elapsed_secs() * 2.0) as u64 % 2 == 0;
    let (left, right) = if rock { ("♥ ", " ♥") } else { (" ♥", "♥ ") };
    let title = Line::from(vec![
        Span::styled(left, Theme::accent()),
        Span::styled(letter_title(&state.config.recipient), Theme::title()),
        Span::styled(right, Theme::accent()),
    ]);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" Esc to close, ↑↓ to scroll ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ROSE))
        .style(Theme::letter_surface());

    let scroll = scroll.min(max_letter_scroll(frame.area()));
    let paragraph = Paragraph::new(letter_lines())
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_paragraph_is_emphasised() {
        let lines = letter_lines();
        let emphasised: Vec<&Line> = lines
            .iter()
            .filter(|l| l.spans.iter().any(|s| s.style == Theme::letter_emphasis()))
            .collect();
        assert_eq!(emphasised.len(), 1);
        assert_eq!(emphasised[0].to_string(), LETTER_PARAGRAPHS[5]);
    }

    #[test]
    fn scroll_limit_shrinks_as_the_popup_grows() {
        let small = max_letter_scroll(Rect::new(0, 0, 60, 20));
        let large = max_letter_scroll(Rect::new(0, 0, 160, 60));
        assert!(small > 0);
        assert!(large < small);
        assert_eq!(max_letter_scroll(Rect::new(0, 0, 2, 2)), 0);
    }

    #[test]
    fn ends_with_the_signature() {
        let lines = letter_lines();
        let tail: Vec<String> = lines[lines.len() - 3..].iter().map(|l| l.to_string()).collect();
        assert_eq!(
            tail,
            vec![
                "💕💕💕💕💕💕".to_string(),
                "Forever Yours".to_string(),
                "With All My Love ❤️".to_string(),
            ]
        );
    }
}
