use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ROSE: Color = Color::Rgb(244, 63, 94);
    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const BLUSH: Color = Color::Rgb(249, 168, 212);
    pub const PETAL_DIM: Color = Color::Rgb(131, 52, 87);
    pub const TEXT: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);
    pub const BG_SURFACE: Color = Color::Rgb(36, 16, 26);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::ROSE).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::PINK)
    }

    pub fn question() -> Style {
        Style::default().fg(Self::ROSE).add_modifier(Modifier::BOLD)
    }

    pub fn photo() -> Style {
        Style::default()
            .fg(Self::BLUSH)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn accept_button() -> Style {
        Style::default().fg(Color::White).bg(Self::ROSE).add_modifier(Modifier::BOLD)
    }

    pub fn decline_button() -> Style {
        Style::default().fg(Self::ROSE).add_modifier(Modifier::BOLD)
    }

    pub fn button_border() -> Style {
        Style::default().fg(Self::BLUSH)
    }

    pub fn button_border_focused() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Heart style for a particle at the given opacity (0..=1).
    pub fn particle(opacity: f64) -> Style {
        if opacity < 0.33 {
            Style::default().fg(Self::PETAL_DIM)
        } else if opacity < 0.66 {
            Style::default().fg(Self::BLUSH)
        } else {
            Style::default().fg(Self::PINK).add_modifier(Modifier::BOLD)
        }
    }

    pub fn letter_surface() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn letter_intro() -> Style {
        Style::default()
            .fg(Self::BLUSH)
            .add_modifier(Modifier::ITALIC | Modifier::BOLD)
    }

    pub fn letter_emphasis() -> Style {
        Style::default().fg(Self::BLUSH).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PETAL_DIM)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Self::BLUSH).bg(Self::PETAL_DIM)
    }
}
