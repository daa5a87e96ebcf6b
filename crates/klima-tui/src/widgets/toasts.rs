//! Toast stack — transient notifications in the top-right corner.
//!
//! Pure render: the toast list lives in `klima_core::Notifier`, which
//! expires each toast on its own timer. Whatever is active gets drawn.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use klima_core::{Notification, NotificationKind};

use crate::theme;

const TOAST_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, area: Rect, toasts: &[Notification]) {
    if toasts.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in toasts {
        // Each toast is a 3-row bordered box; stop when we run out of rows.
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, 3);

        let (color, prefix) = match toast.kind {
            NotificationKind::Success => (theme::SUCCESS, "✓"),
            NotificationKind::Error => (theme::ERROR, "✗"),
            NotificationKind::Warning => (theme::WARNING, "!"),
            NotificationKind::Info => (theme::ACCENT, "i"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        let line = Line::from(vec![
            Span::styled(format!(" {prefix} "), Style::default().fg(color)),
            Span::raw(truncate(&toast.message, usize::from(width.saturating_sub(5)))),
        ]);

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(line).block(block), rect);

        y += 3;
    }
}

fn truncate(message: &str, max: usize) -> String {
    if message.chars().count() <= max {
        return message.to_owned();
    }
    let mut out: String = message.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
