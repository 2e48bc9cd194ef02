//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::timeline::ThemeIcon;

/// Colors for the timeline view
pub mod timeline_view {
    use super::*;

    /// Changelist number
    pub const CHANGE: Color = Color::Yellow;
    /// Integration operation label
    pub const INTEGRATION: Color = Color::Cyan;
    /// Description text
    pub const DESCRIPTION: Color = Color::DarkGray;
    /// Expand/collapse marker
    pub const MARKER: Color = Color::Blue;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
    /// Details pane header
    pub const DETAILS_HEADER: Color = Color::Green;
}

/// Colors for the diff view
pub mod diff_view {
    use super::*;

    pub const ADDED: Color = Color::Green;
    pub const DELETED: Color = Color::Red;
    pub const CONTEXT: Color = Color::Reset;
    pub const HUNK_HEADER: Color = Color::Cyan;
    pub const FILE_HEADER: Color = Color::Yellow;
}

/// Icon color by kind of action
pub fn icon_color(icon: ThemeIcon) -> Color {
    match icon {
        ThemeIcon::ADD => Color::Green,
        ThemeIcon::DELETE | ThemeIcon::DELETE_CELL | ThemeIcon::DEBUG => Color::Red,
        ThemeIcon::EDIT => Color::Yellow,
        ThemeIcon::BRANCH | ThemeIcon::QUEUED | ThemeIcon::EXPLORER => Color::Magenta,
        _ => Color::Gray,
    }
}
