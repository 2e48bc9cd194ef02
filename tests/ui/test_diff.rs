//! Rendering tests for the Diff View
//!
//! Uses ratatui's TestBackend; single lines are checked with insta inline
//! snapshots.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use p4tl::model::DiffContent;
use p4tl::p4::parser::parse_diff2;
use p4tl::ui::views::DiffView;

use super::{row_text, screen_text};

const DIFF2: &str = "\
==== //depot/main/a.c#4 (text) - //depot/main/a.c#5 (text) ==== content
@@ -1,2 +1,2 @@
-if (n > max)
+if (n >= max)
     return;
";

#[test]
fn test_diff_view_header_and_lines() {
    let view = DiffView::new(parse_diff2(DIFF2, "//depot/main/a.c#4", "//depot/main/a.c#5"));

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    assert_snapshot!(row_text(&terminal, 1), @"From: //depot/main/a.c#4");
    assert_snapshot!(row_text(&terminal, 2), @"To:   //depot/main/a.c#5");
    assert_snapshot!(row_text(&terminal, 3), @"+1 -1");
    assert_snapshot!(row_text(&terminal, 5), @"@@ -1,2 +1,2 @@");
    // Leading marker column is significant here
    assert_eq!(row_text(&terminal, 6), " -if (n > max)");
    assert_eq!(row_text(&terminal, 7), " +if (n >= max)");
}

#[test]
fn test_diff_view_identical_revisions() {
    let view = DiffView::new(DiffContent {
        left: "//depot/main/a.c#4".to_string(),
        right: "//depot/main/a.c#5".to_string(),
        lines: vec![],
    });

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("p4tl - Diff"), "{}", screen);
    assert!(screen.contains("Revisions are identical."), "{}", screen);
}
