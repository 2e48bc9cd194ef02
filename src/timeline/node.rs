//! Display nodes handed to the tree widget

use std::rc::Rc;

use crate::model::{IntegrationRecord, RevisionRecord};
use crate::p4::FileSpec;

/// The history record a node was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryItem {
    Revision(Rc<RevisionRecord>),
    Integration(IntegrationRecord),
}

/// Icon identifier (codicon name); hosts map it to whatever they can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeIcon(pub &'static str);

impl ThemeIcon {
    pub const ADD: ThemeIcon = ThemeIcon("add");
    pub const ARCHIVE: ThemeIcon = ThemeIcon("archive");
    pub const BRANCH: ThemeIcon = ThemeIcon("git-branch");
    pub const DELETE_CELL: ThemeIcon = ThemeIcon("notebook-delete-cell");
    pub const EDIT: ThemeIcon = ThemeIcon("edit");
    pub const QUEUED: ThemeIcon = ThemeIcon("testing-queued-icon");
    pub const RUN_ALL: ThemeIcon = ThemeIcon("testing-run-all-icon");
    pub const LOCK: ThemeIcon = ThemeIcon("private-ports-view-icon");
    pub const DELETE: ThemeIcon = ThemeIcon("delete");
    pub const DEBUG: ThemeIcon = ThemeIcon("testing-debug-icon");
    pub const EXPLORER: ThemeIcon = ThemeIcon("explorer-view-icon");
    pub const COMMIT: ThemeIcon = ThemeIcon("git-commit");

    pub fn id(self) -> &'static str {
        self.0
    }
}

/// Whether a node can be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collapsible {
    /// Leaf
    #[default]
    None,
    /// Has children, shown collapsed until expanded
    Collapsed,
}

/// Command a node is bound to; the host decides how to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Command id (see [`super::commands`])
    pub id: &'static str,
    /// Human-readable title
    pub title: String,
    pub arguments: Vec<FileSpec>,
}

/// Display-ready tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub label: String,
    pub description: Option<String>,
    pub icon: ThemeIcon,
    /// Markdown tooltip (revisions only)
    pub tooltip: Option<String>,
    pub collapsible: Collapsible,
    /// Bound command (edit revisions only)
    pub command: Option<CommandDescriptor>,
    pub source: HistoryItem,
}

impl DisplayNode {
    pub fn is_collapsible(&self) -> bool {
        self.collapsible == Collapsible::Collapsed
    }

    /// Revision this node was derived from, if any
    pub fn revision(&self) -> Option<&RevisionRecord> {
        match &self.source {
            HistoryItem::Revision(revision) => Some(revision),
            HistoryItem::Integration(_) => None,
        }
    }
}
