//! Rendering tests for the Timeline View
//!
//! Drives the view from a real HistoryTreeController over a fixed history,
//! rendered with ratatui's TestBackend.

use std::future::{Future, ready};
use std::path::Path;

use futures::executor::block_on;
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use p4tl::config::TimelineConfig;
use p4tl::model::{Direction, FileAction, IntegrationRecord, Notification, RevisionRecord};
use p4tl::p4::{FileSpec, HistoryOptions, HistoryQuery, P4Error};
use p4tl::timeline::HistoryTreeController;
use p4tl::ui::views::TimelineView;

use super::{row_text, screen_text};

/// History source answering every query with the same revisions
struct FixedHistory(Vec<RevisionRecord>);

impl HistoryQuery for FixedHistory {
    fn file_history(
        &self,
        _file: &FileSpec,
        _options: HistoryOptions,
    ) -> impl Future<Output = Result<Vec<RevisionRecord>, P4Error>> {
        ready(Ok(self.0.clone()))
    }
}

fn create_test_history() -> Vec<RevisionRecord> {
    vec![
        RevisionRecord {
            change: "120".to_string(),
            revision: "3".to_string(),
            operation: FileAction::Edit,
            user: "alice".to_string(),
            client: "alice-ws".to_string(),
            date: "2024/01/29 10:00:00".to_string(),
            description: "Fix overflow\nSecond line".to_string(),
            integrations: vec![],
        },
        RevisionRecord {
            change: "95".to_string(),
            revision: "2".to_string(),
            operation: FileAction::Branch,
            user: "bob".to_string(),
            client: "bob-ws".to_string(),
            date: "2024/01/28 10:00:00".to_string(),
            description: "Branch from dev".to_string(),
            integrations: vec![IntegrationRecord {
                operation: FileAction::Branch,
                direction: Direction::From,
                file: "//depot/dev/a.c".to_string(),
                end_rev: "3".to_string(),
            }],
        },
    ]
}

fn loaded_controller() -> HistoryTreeController<FixedHistory> {
    let controller =
        HistoryTreeController::new(FixedHistory(create_test_history()), TimelineConfig::default());
    block_on(controller.on_focus_changed(Some(Path::new("//depot/main/a.c"))));
    controller
}

fn loaded_view(controller: &HistoryTreeController<FixedHistory>) -> TimelineView {
    let mut view = TimelineView::new();
    view.reload(controller);
    view.title = controller.tracked_file().map(|f| f.to_string());
    view
}

#[test]
fn test_timeline_view_empty() {
    let mut view = TimelineView::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("p4tl - Timeline"), "{}", screen);
    assert!(screen.contains("No file history loaded."), "{}", screen);
}

#[test]
fn test_timeline_view_revisions() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);
    view.show_details = false;

    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("p4tl - //depot/main/a.c"), "{}", screen);
    assert_snapshot!(row_text(&terminal, 1), @"│  ✎ 120  #3 Fix overflow");
    assert_snapshot!(row_text(&terminal, 2), @"│▸ ⑂ 95  #2 Branch from dev");
}

#[test]
fn test_timeline_view_expanded_integration() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);
    view.show_details = false;
    view.move_down();
    view.expand(&controller);

    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    assert_snapshot!(row_text(&terminal, 2), @"│▾ ⑂ 95  #2 Branch from dev");
    assert_snapshot!(row_text(&terminal, 3), @"│    ⑂ branch  branch from //depot/dev/a.c#3");
}

#[test]
fn test_timeline_view_details_pane() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);

    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Details"), "{}", screen);
    assert!(screen.contains("#3-edit alice (alice-ws)"), "{}", screen);
    assert!(screen.contains("2024/01/29 10:00:00"), "{}", screen);
    assert!(screen.contains("Second line"), "{}", screen);
}

#[test]
fn test_timeline_view_details_hidden_when_short() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);

    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(!screen.contains("Details"), "{}", screen);
    assert!(screen.contains("120"), "{}", screen);
}

#[test]
fn test_timeline_view_notification_in_title() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);
    let notification = Notification::info("Loaded");

    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), Some(&notification)))
        .unwrap();

    let top = row_text(&terminal, 0);
    assert!(top.contains("Info:"), "{}", top);
    assert!(top.contains("Loaded"), "{}", top);
}

#[test]
fn test_timeline_view_scrolls_to_selection() {
    let controller = loaded_controller();
    let mut view = loaded_view(&controller);
    view.show_details = false;
    view.move_to_bottom();

    // One visible row
    let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    assert_eq!(view.scroll_offset, 1);
    assert!(row_text(&terminal, 1).contains("95"));
}
