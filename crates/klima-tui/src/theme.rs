//! Color palette and shared styles.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const DIM: Color = Color::DarkGray;

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(DIM)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT)
}

pub fn selected_row() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(DIM)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(ACCENT)
}

pub fn label() -> Style {
    Style::default().fg(DIM)
}

pub fn field_error() -> Style {
    Style::default().fg(ERROR)
}
