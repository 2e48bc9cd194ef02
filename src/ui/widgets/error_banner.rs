//! Error banner widget

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Clear, Paragraph},
};

use crate::ui::components;

/// Render an error message just above the status bar
///
/// Only the first line of multi-line errors (p4 stderr) is shown.
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let area = frame.area();
    if area.height < 3 {
        return;
    }

    let error_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    let first_line = error.lines().next().unwrap_or_default();
    frame.render_widget(Clear, error_area);
    frame.render_widget(
        Paragraph::new(components::build_error_line(first_line)),
        error_area,
    );
}
