//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for the title bar
///
/// Messages longer than `max_width` are cut and end with "…"; if not even
/// the label fits, the line is empty.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    // " " + label + " " + message + " "
    let overhead = label.len() + 3;
    let available = max_width.saturating_sub(overhead);
    if available < 2 {
        return Line::default();
    }

    let message = &notification.message;
    let text = if message.chars().count() > available {
        let cut: String = message.chars().take(available - 1).collect();
        format!("{}…", cut)
    } else {
        message.clone()
    };

    Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(format!(" {} ", text), Style::default().fg(color)),
    ])
}
