//! Rendering for DiffView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{DiffLine, DiffLineKind, Notification};
use crate::ui::{components, theme};

use super::DiffView;

impl DiffView {
    /// Render the diff view (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        // Layout: header (border + left + right + stats) + diff (rest)
        let header_height = 4_u16.min(area.height.saturating_sub(1));
        let chunks =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(1)]).split(area);

        self.render_header(frame, chunks[0], notification);
        self.render_diff_content(frame, chunks[1]);
    }

    /// Render the compared revisions and line stats
    fn render_header(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" p4tl - Diff ").bold().cyan().centered();

        let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, available_for_notif))
            .filter(|line| !line.spans.is_empty());

        let (added, deleted) = self.content.stats();
        let mut stats = vec![
            Span::styled(
                format!("+{}", added),
                Style::default().fg(theme::diff_view::ADDED),
            ),
            Span::raw(" "),
            Span::styled(
                format!("-{}", deleted),
                Style::default().fg(theme::diff_view::DELETED),
            ),
        ];
        if let Some(hunk) = self.current_hunk() {
            stats.push(Span::styled(
                format!("  hunk {}/{}", hunk, self.hunk_positions.len()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let header_text = vec![
            Line::from(vec![
                Span::styled("From: ", Style::default().fg(Color::Red).bold()),
                Span::raw(self.content.left.clone()),
            ]),
            Line::from(vec![
                Span::styled("To:   ", Style::default().fg(Color::Green).bold()),
                Span::raw(self.content.right.clone()),
            ]),
            Line::from(stats),
        ];

        let block = components::top_border_block(title);
        let block = match notif_line {
            Some(notif) => block.title(notif.right_aligned()),
            None => block,
        };

        frame.render_widget(Paragraph::new(header_text).block(block), area);
    }

    /// Render the diff content (scrollable)
    fn render_diff_content(&self, frame: &mut Frame, area: Rect) {
        if !self.has_changes() {
            frame.render_widget(components::no_changes_state(), area);
            return;
        }

        let lines: Vec<Line> = self
            .content
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(area.height as usize)
            .map(render_diff_line)
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_diff_line(line: &DiffLine) -> Line<'static> {
    match line.kind {
        DiffLineKind::FileHeader => Line::from(Span::styled(
            format!("── {} ──", line.content),
            Style::default().fg(theme::diff_view::FILE_HEADER).bold(),
        )),
        DiffLineKind::HunkHeader => Line::from(Span::styled(
            line.content.clone(),
            Style::default().fg(theme::diff_view::HUNK_HEADER),
        )),
        DiffLineKind::Context => Line::from(vec![
            Span::raw("  "),
            Span::styled(
                line.content.clone(),
                Style::default().fg(theme::diff_view::CONTEXT),
            ),
        ]),
        DiffLineKind::Added => Line::from(vec![
            Span::styled(" +", Style::default().fg(theme::diff_view::ADDED)),
            Span::styled(
                line.content.clone(),
                Style::default().fg(theme::diff_view::ADDED),
            ),
        ]),
        DiffLineKind::Deleted => Line::from(vec![
            Span::styled(" -", Style::default().fg(theme::diff_view::DELETED)),
            Span::styled(
                line.content.clone(),
                Style::default().fg(theme::diff_view::DELETED),
            ),
        ]),
    }
}
