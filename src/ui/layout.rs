use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Emphasis above which both intro buttons switch to the tall style.
pub const LARGE_BUTTON_THRESHOLD: f64 = 1.5;
pub const BUTTON_GAP: u16 = 4;
const BUTTON_PADDING: u16 = 6;
// Title, blank, question, sparkles, two blanks.
const INTRO_TEXT_HEIGHT: u16 = 6;

pub struct AppLayout {
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        body: chunks[0],
        status_bar: chunks[1],
    }
}

pub struct IntroLayout {
    pub title: Rect,
    pub question: Rect,
    pub sparkles: Rect,
    pub accept_button: Rect,
    pub decline_button: Rect,
}

/// Outer size of a bordered button around `label`.
pub fn button_size(label: &str, large: bool) -> (u16, u16) {
    let width = (label.width() as u16).saturating_add(BUTTON_PADDING);
    (width, if large { 5 } else { 3 })
}

fn scale(value: u16, factor: f64) -> u16 {
    (f64::from(value) * factor).round().min(f64::from(u16::MAX)) as u16
}

/// Places the intro text block and the two buttons, centered in `body`.
///
/// The affirmative button grows with `emphasis` in both directions and is
/// clamped to what the body can hold. When the buttons no longer fit side
/// by side the negative one drops below.
pub fn intro_layout(body: Rect, emphasis: f64, accept_label: &str, decline_label: &str) -> IntroLayout {
    let large = emphasis > LARGE_BUTTON_THRESHOLD;
    let (base_w, base_h) = button_size(accept_label, large);
    let (no_w, no_h) = button_size(decline_label, large);
    let no_w = no_w.min(body.width);

    let yes_w = scale(base_w, emphasis).min(body.width);
    let side_by_side = yes_w + BUTTON_GAP + no_w <= body.width;
    let reserved = INTRO_TEXT_HEIGHT + if side_by_side { 0 } else { no_h + 1 };
    let yes_h = scale(base_h, emphasis)
        .min(body.height.saturating_sub(reserved))
        .max(base_h.min(body.height));

    let buttons_h = if side_by_side {
        yes_h.max(no_h)
    } else {
        yes_h + 1 + no_h
    };
    let content_h = (INTRO_TEXT_HEIGHT + buttons_h).min(body.height);
    let top = body.y + (body.height - content_h) / 2;
    let line = |offset: u16| Rect::new(body.x, top + offset, body.width, 1).intersection(body);

    let buttons_top = top + INTRO_TEXT_HEIGHT;
    let (accept_button, decline_button) = if side_by_side {
        let row_w = yes_w + BUTTON_GAP + no_w;
        let left = body.x + (body.width - row_w) / 2;
        (
            Rect::new(left, buttons_top + (buttons_h - yes_h) / 2, yes_w, yes_h),
            Rect::new(
                left + yes_w + BUTTON_GAP,
                buttons_top + (buttons_h - no_h) / 2,
                no_w,
                no_h,
            ),
        )
    } else {
        (
            Rect::new(body.x + (body.width - yes_w) / 2, buttons_top, yes_w, yes_h),
            Rect::new(
                body.x + (body.width - no_w) / 2,
                buttons_top + yes_h + 1,
                no_w,
                no_h,
            ),
        )
    };

    IntroLayout {
        title: line(0),
        question: line(2),
        sparkles: line(3),
        accept_button: accept_button.intersection(body),
        decline_button: decline_button.intersection(body),
    }
}

pub struct CelebrationLayout {
    pub header: Rect,
    pub sections: Rect,
    pub letter_button: Rect,
    pub caption: Rect,
}

pub fn celebration_layout(body: Rect, letter_label: &str) -> CelebrationLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Icon, title, subtitle, blank
            Constraint::Min(3),    // Memory sections
            Constraint::Length(3), // Letter button
            Constraint::Length(1), // Caption
        ])
        .split(body);

    // Keep the sections column readable on wide terminals.
    let sections_w = chunks[1].width.min(96);
    let sections = Rect::new(
        chunks[1].x + (chunks[1].width - sections_w) / 2,
        chunks[1].y,
        sections_w,
        chunks[1].height,
    );

    let (button_w, _) = button_size(letter_label, false);
    let button_w = button_w.min(chunks[2].width);
    let letter_button = Rect::new(
        chunks[2].x + (chunks[2].width - button_w) / 2,
        chunks[2].y,
        button_w,
        chunks[2].height,
    );

    CelebrationLayout {
        header: chunks[0],
        sections,
        letter_button,
        caption: chunks[3],
    }
}

/// The letter popup: 80% width, 85% height, centered and kept inside `area`.
pub fn letter_popup(area: Rect) -> Rect {
    let popup_w = ((u32::from(area.width) * 80 / 100) as u16)
        .max(40)
        .min(area.width.saturating_sub(2));
    let popup_h = ((u32::from(area.height) * 85 / 100) as u16)
        .max(12)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ACCEPT_LABEL, DECLINE_PHRASES, LETTER_BUTTON_LABEL};
    use pretty_assertions::assert_eq;

    const BODY: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 39,
    };

    #[test]
    fn status_bar_is_the_last_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.body, Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn buttons_sit_side_by_side_at_rest() {
        let layout = intro_layout(BODY, 1.0, ACCEPT_LABEL, DECLINE_PHRASES[0]);
        let yes = layout.accept_button;
        let no = layout.decline_button;
        assert_eq!(yes.height, 3);
        assert_eq!(yes.y, no.y);
        assert_eq!(yes.x + yes.width + BUTTON_GAP, no.x);
        assert!(!yes.intersects(no));
    }

    #[test]
    fn accept_button_grows_with_emphasis() {
        let small = intro_layout(BODY, 1.0, ACCEPT_LABEL, DECLINE_PHRASES[0]).accept_button;
        let big = intro_layout(BODY, 2.5, ACCEPT_LABEL, DECLINE_PHRASES[3]).accept_button;
        assert!(big.width > small.width);
        assert!(big.height > small.height);
    }

    #[test]
    fn buttons_stay_inside_the_body() {
        for body in [BODY, Rect::new(0, 0, 40, 12), Rect::new(3, 2, 20, 8)] {
            for emphasis in [1.0, 2.0, 3.5, 5.0] {
                let layout = intro_layout(body, emphasis, ACCEPT_LABEL, DECLINE_PHRASES[9]);
                for rect in [layout.accept_button, layout.decline_button] {
                    assert_eq!(rect.intersection(body), rect);
                }
            }
        }
    }

    #[test]
    fn negative_button_drops_below_when_crowded() {
        let body = Rect::new(0, 0, 60, 30);
        let layout = intro_layout(body, 5.0, ACCEPT_LABEL, DECLINE_PHRASES[9]);
        assert!(layout.decline_button.y >= layout.accept_button.bottom());
    }

    #[test]
    fn letter_button_is_centered() {
        let layout = celebration_layout(BODY, LETTER_BUTTON_LABEL);
        let button = layout.letter_button;
        assert_eq!(button.height, 3);
        let left = button.x;
        let right = BODY.width - (button.x + button.width);
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn popup_fits_inside_small_screens() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = letter_popup(area);
        assert_eq!(popup.intersection(area), popup);
        let popup = letter_popup(Rect::new(0, 0, 100, 40));
        assert_eq!(popup, Rect::new(10, 3, 80, 34));
    }
}
