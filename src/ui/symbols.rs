//! UI symbols (icon glyphs, tree markers)
//!
//! Nodes carry codicon ids; the terminal can't draw codicons, so each id is
//! mapped to a single Unicode glyph here. Unknown ids get the commit glyph.

use crate::timeline::ThemeIcon;

/// Tree expansion markers
pub mod tree {
    /// Collapsed node with children (▸)
    pub const COLLAPSED: char = '▸';
    /// Expanded node (▾)
    pub const EXPANDED: char = '▾';
    /// Leaf (no marker)
    pub const LEAF: char = ' ';
    /// Indentation per depth level
    pub const INDENT: &str = "  ";
}

/// Glyph for a node icon
pub fn icon_glyph(icon: ThemeIcon) -> char {
    match icon.id() {
        "add" => '+',
        "archive" => '▣',
        "git-branch" => '⑂',
        "notebook-delete-cell" | "delete" => '✗',
        "edit" => '✎',
        "testing-queued-icon" => '⇄',
        "testing-run-all-icon" => '⇣',
        "private-ports-view-icon" => '⚿',
        "testing-debug-icon" => '⌫',
        "explorer-view-icon" => '⧉',
        _ => '○',
    }
}

/// Empty state labels
pub mod empty {
    pub const NO_DESCRIPTION: &str = "(no description)";
}
