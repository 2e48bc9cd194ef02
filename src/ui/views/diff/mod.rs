//! Diff View
//!
//! Displays `p4 diff2` output for the two revisions bound to an edit node.

mod input;
mod render;

use crate::model::{DiffContent, DiffLineKind};

/// Action returned by DiffView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    /// No action needed
    None,
    /// Return to timeline view
    Back,
}

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Parsed diff content
    pub content: DiffContent,
    /// Scroll offset (line index)
    pub scroll_offset: usize,
    /// Positions of hunk headers in the lines array
    pub hunk_positions: Vec<usize>,
    /// Last known visible height (updated during render)
    visible_height: usize,
}

impl Default for DiffView {
    fn default() -> Self {
        Self::new(DiffContent::default())
    }
}

impl DiffView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    pub fn new(content: DiffContent) -> Self {
        let hunk_positions = content
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.kind == DiffLineKind::HunkHeader)
            .map(|(i, _)| i)
            .collect();

        Self {
            content,
            scroll_offset: 0,
            hunk_positions,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Check if there are any changes to display
    pub fn has_changes(&self) -> bool {
        self.content.has_changes()
    }

    /// Total number of diff lines
    pub fn total_lines(&self) -> usize {
        self.content.lines.len()
    }

    /// 1-based index of the hunk at the top of the screen, if any
    pub fn current_hunk(&self) -> Option<usize> {
        self.hunk_positions
            .iter()
            .rposition(|&pos| pos <= self.scroll_offset)
            .map(|i| i + 1)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
    }

    fn max_scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        self.total_lines().saturating_sub(self.visible_height)
    }

    pub fn scroll_half_page_up(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height / 2);
    }

    pub fn scroll_half_page_down(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        let max_offset = self.max_scroll_offset();
        self.scroll_offset = (self.scroll_offset + visible_height / 2).min(max_offset);
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.max_scroll_offset();
    }

    /// Jump to the next hunk header, wrapping to the first
    pub fn next_hunk(&mut self) {
        let next = self
            .hunk_positions
            .iter()
            .find(|&&pos| pos > self.scroll_offset)
            .or(self.hunk_positions.first());
        if let Some(&pos) = next {
            self.scroll_offset = pos;
        }
    }

    /// Jump to the previous hunk header, wrapping to the last
    pub fn prev_hunk(&mut self) {
        let prev = self
            .hunk_positions
            .iter()
            .rev()
            .find(|&&pos| pos < self.scroll_offset)
            .or(self.hunk_positions.last());
        if let Some(&pos) = prev {
            self.scroll_offset = pos;
        }
    }
}
