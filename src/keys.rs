//! Keybinding definitions for p4tl
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Go back / cancel input
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char('d');
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('u');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Timeline View keys
// =============================================================================

/// Expand/collapse, or run the node's command
pub const ACTIVATE: KeyCode = KeyCode::Enter;

/// Expand the selected node
pub const EXPAND: KeyCode = KeyCode::Char('l');
pub const EXPAND_ARROW: KeyCode = KeyCode::Right;

/// Collapse the selected node (or jump to its parent)
pub const COLLAPSE: KeyCode = KeyCode::Char('h');
pub const COLLAPSE_ARROW: KeyCode = KeyCode::Left;

/// Focus next / previous file
pub const NEXT_FILE: KeyCode = KeyCode::Char(']');
pub const PREV_FILE: KeyCode = KeyCode::Char('[');
pub const TAB: KeyCode = KeyCode::Tab;

/// Open a path prompt and focus that file
pub const OPEN_FILE: KeyCode = KeyCode::Char('o');

/// Toggle the details pane
pub const DETAILS: KeyCode = KeyCode::Char('i');

/// Check if key expands (l or →)
pub fn is_expand(code: KeyCode) -> bool {
    matches!(code, EXPAND | EXPAND_ARROW)
}

/// Check if key collapses (h or ←)
pub fn is_collapse(code: KeyCode) -> bool {
    matches!(code, COLLAPSE | COLLAPSE_ARROW)
}

// =============================================================================
// Diff View keys
// =============================================================================

/// Jump to next / previous hunk
pub const NEXT_HUNK: KeyCode = KeyCode::Char(']');
pub const PREV_HUNK: KeyCode = KeyCode::Char('[');

// =============================================================================
// Input keys (used in the path prompt)
// =============================================================================

/// Submit input
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const TIMELINE_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Expand/Diff",
        color: Color::Green,
    },
    KeyHint {
        key: "[/]",
        label: "File",
        color: Color::Magenta,
    },
    KeyHint {
        key: "o",
        label: "Open",
        color: Color::Magenta,
    },
    KeyHint {
        key: "i",
        label: "Details",
        color: Color::Yellow,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const DIFF_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Scroll",
        color: Color::Cyan,
    },
    KeyHint {
        key: "d/u",
        label: "Page",
        color: Color::Cyan,
    },
    KeyHint {
        key: "[/]",
        label: "Hunk",
        color: Color::Magenta,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
];

pub const PROMPT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Focus file",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Cancel",
        color: Color::Red,
    },
];
