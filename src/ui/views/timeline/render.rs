//! Rendering for TimelineView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::model::Notification;
use crate::timeline::HistoryItem;
use crate::ui::{components, symbols, theme};

use super::{TimelineView, TreeRow, empty_text};

/// Height of the details pane (including its border)
const DETAILS_HEIGHT: u16 = 9;

impl TimelineView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let details = self
            .show_details
            .then(|| self.selected_node().and_then(|n| n.tooltip.clone()))
            .flatten();

        let (tree_area, details_area) = match details {
            Some(_) if area.height > DETAILS_HEIGHT + 3 => {
                let chunks =
                    Layout::vertical([Constraint::Min(3), Constraint::Length(DETAILS_HEIGHT)])
                        .split(area);
                (chunks[0], Some(chunks[1]))
            }
            _ => (area, None),
        };

        self.render_tree(frame, tree_area, notification);

        if let (Some(details_area), Some(text)) = (details_area, details) {
            render_details(frame, details_area, &text);
        }
    }

    fn render_tree(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();
        let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, available_for_notif))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.rows.is_empty() {
            frame.render_widget(components::no_history_state().block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        self.scroll_offset = self.calculate_scroll_offset(inner_height);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(idx, row)| build_row_line(row, idx == self.selected_index))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_title(&self) -> Line<'static> {
        let title = match &self.title {
            Some(file) => Line::from(format!(" p4tl - {} ", file)),
            None => Line::from(empty_text::TITLE),
        };
        title.bold().cyan().centered()
    }

    pub(super) fn calculate_scroll_offset(&self, visible_rows: usize) -> usize {
        let mut offset = self.scroll_offset;

        // Ensure selected row is visible
        if self.selected_index < offset {
            offset = self.selected_index;
        } else if self.selected_index >= offset + visible_rows {
            offset = self.selected_index + 1 - visible_rows;
        }

        offset
    }
}

fn build_row_line(row: &TreeRow, is_selected: bool) -> Line<'static> {
    let node = &row.node;
    let marker = if !node.is_collapsible() {
        symbols::tree::LEAF
    } else if row.expanded {
        symbols::tree::EXPANDED
    } else {
        symbols::tree::COLLAPSED
    };
    let label_color = match node.source {
        HistoryItem::Revision(_) => theme::timeline_view::CHANGE,
        HistoryItem::Integration(_) => theme::timeline_view::INTEGRATION,
    };

    let mut spans = vec![
        Span::raw(symbols::tree::INDENT.repeat(row.depth)),
        Span::styled(
            format!("{} ", marker),
            Style::default().fg(theme::timeline_view::MARKER),
        ),
        Span::styled(
            format!("{} ", symbols::icon_glyph(node.icon)),
            Style::default().fg(theme::icon_color(node.icon)),
        ),
        Span::styled(node.label.clone(), Style::default().fg(label_color).bold()),
    ];

    if let Some(description) = &node.description {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            description.clone(),
            Style::default().fg(theme::timeline_view::DESCRIPTION),
        ));
    }

    let line = Line::from(spans);
    if is_selected {
        line.style(Style::default().bg(theme::timeline_view::SELECTED_BG))
    } else {
        line
    }
}

/// Render a node tooltip as plain text, keeping its paragraph breaks
fn render_details(frame: &mut Frame, area: Rect, text: &str) {
    let title = Line::from(" Details ")
        .bold()
        .fg(theme::timeline_view::DETAILS_HEADER);
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(lines)
        .block(components::top_border_block(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
