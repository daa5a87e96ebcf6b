//! Delete confirmation overlay.
//!
//! Stays open after a failed delete (the error arrives as a toast), so the
//! user can retry with `y` or back out with `Esc`/`n`.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme;
use crate::widgets::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, target_label: &str, pending: bool) {
    let rect = centered_rect(area, 50, 7);

    let block = Block::default()
        .title(" Delete conditioner ")
        .title_style(theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());

    let body = if pending {
        vec![
            Line::from(""),
            Line::from(Span::styled("Deleting…", theme::label())),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(format!("Delete \"{target_label}\"? This cannot be undone.")),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", theme::key_hint_key()),
                Span::styled(" delete   ", theme::key_hint()),
                Span::styled("n/Esc", theme::key_hint_key()),
                Span::styled(" cancel", theme::key_hint()),
            ]),
        ]
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}
