//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::ui::views::DiffView;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    build_status_bar_with_prefix(Vec::new(), hints)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar for the timeline view
///
/// `focus` is `(position, count)` of the focused file among the tracked files.
pub fn render_timeline_status_bar(frame: &mut Frame, focus: Option<(usize, usize)>) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let prefix = match focus {
        Some((position, count)) => vec![Span::styled(
            format!(" {}/{} ", position + 1, count),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )],
        None => Vec::new(),
    };

    let status = build_status_bar_with_prefix(prefix, keys::TIMELINE_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for diff view
pub fn render_diff_status_bar(frame: &mut Frame, diff_view: &DiffView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let prefix = vec![Span::styled(
        format!(" {} ", diff_view.content.right),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];

    let status = build_status_bar_with_prefix(prefix, keys::DIFF_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar while the path prompt is open
pub fn render_prompt_status_bar(frame: &mut Frame) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(keys::PROMPT_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}
