//! Empty state components

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}

/// Empty state for "nothing tracked yet"
pub fn no_history_state() -> Paragraph<'static> {
    empty_state(
        "No file history loaded.",
        Some("Focus a file under Perforce control ([ ] to switch, o to open)"),
    )
}

/// Empty state for a diff between identical revisions
pub fn no_changes_state() -> Paragraph<'static> {
    empty_state("Revisions are identical.", Some("Press q to go back"))
}
