//! Block components for UI rendering

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Create a bordered block with a notification appended to the title
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title(line.right_aligned()),
        None => block,
    }
}

/// Create a block with only a top border (for detail panes)
pub fn top_border_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::TOP).title(title)
}
