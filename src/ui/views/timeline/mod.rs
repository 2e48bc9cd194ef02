//! Timeline View - file history as an expandable tree
//!
//! Only talks to its data through [`TreeDataProvider`]: roots are fetched on
//! reload, children are fetched when a node is expanded.

mod input;
mod render;

use crate::timeline::{CommandDescriptor, DisplayNode, TreeDataProvider};

/// Actions that TimelineView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineAction {
    /// No action needed
    None,
    /// Run a node's bound command
    Run(CommandDescriptor),
    /// Focus the next tracked file
    NextFile,
    /// Focus the previous tracked file
    PrevFile,
    /// Prompt for a file to focus
    OpenFile,
    /// Re-run the history query for the focused file
    Refresh,
}

/// One visible row of the tree
#[derive(Debug, Clone)]
pub struct TreeRow {
    pub node: DisplayNode,
    pub depth: usize,
    pub expanded: bool,
}

pub mod empty_text {
    pub const TITLE: &str = " p4tl - Timeline ";
}

/// Timeline view state
#[derive(Debug)]
pub struct TimelineView {
    /// Visible rows, roots and any expanded children in tree order
    pub rows: Vec<TreeRow>,
    /// Index of the selected row
    pub selected_index: usize,
    /// Scroll offset for display
    pub scroll_offset: usize,
    /// Name of the tracked file (title bar)
    pub title: Option<String>,
    /// Show the details pane for the selected node
    pub show_details: bool,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title: None,
            show_details: true,
        }
    }

    /// Re-query the root nodes
    ///
    /// Expansion state and selection are reset.
    pub fn reload(&mut self, provider: &impl TreeDataProvider) {
        self.rows = provider
            .root_nodes()
            .into_iter()
            .map(|node| TreeRow {
                node,
                depth: 0,
                expanded: false,
            })
            .collect();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_node(&self) -> Option<&DisplayNode> {
        self.selected_row().map(|row| &row.node)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.rows.len().saturating_sub(1);
    }

    /// Expand the selected node, fetching its children
    pub fn expand(&mut self, provider: &impl TreeDataProvider) {
        let index = self.selected_index;
        let Some(row) = self.rows.get(index) else {
            return;
        };
        if row.expanded || !row.node.is_collapsible() {
            return;
        }

        let depth = row.depth + 1;
        let children = provider.children(&row.node);
        self.rows[index].expanded = true;
        self.rows.splice(
            index + 1..index + 1,
            children.into_iter().map(|node| TreeRow {
                node,
                depth,
                expanded: false,
            }),
        );
    }

    /// Collapse the selected node, or select its parent if it is a child
    pub fn collapse(&mut self) {
        let index = self.selected_index;
        let Some(row) = self.rows.get(index) else {
            return;
        };
        let depth = row.depth;

        if row.expanded {
            let end = self.subtree_end(index);
            self.rows.drain(index + 1..end);
            self.rows[index].expanded = false;
        } else if depth > 0
            && let Some(parent) = self.rows[..index].iter().rposition(|r| r.depth < depth)
        {
            self.selected_index = parent;
        }
    }

    /// Expand or collapse the selected node
    pub fn toggle(&mut self, provider: &impl TreeDataProvider) {
        match self.selected_row().map(|row| row.expanded) {
            Some(true) => self.collapse(),
            Some(false) => self.expand(provider),
            None => {}
        }
    }

    /// Enter on the selected node: run its command, else expand/collapse
    pub fn activate(&mut self, provider: &impl TreeDataProvider) -> TimelineAction {
        let Some(node) = self.selected_node() else {
            return TimelineAction::None;
        };
        if let Some(command) = &node.command {
            return TimelineAction::Run(command.clone());
        }
        self.toggle(provider);
        TimelineAction::None
    }

    /// Index one past the last descendant of `index`
    fn subtree_end(&self, index: usize) -> usize {
        let depth = self.rows[index].depth;
        self.rows[index + 1..]
            .iter()
            .position(|r| r.depth <= depth)
            .map_or(self.rows.len(), |offset| index + 1 + offset)
    }
}
