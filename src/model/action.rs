//! File action vocabulary
//!
//! Perforce records one action per file revision (and one per integration
//! record). Parsing is total: anything outside the known set is kept verbatim
//! as [`FileAction::Other`].

use std::fmt;

/// Action recorded for a file revision or integration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileAction {
    Add,
    Archive,
    Branch,
    Delete,
    Edit,
    Integrate,
    Import,
    Lock,
    MoveAdd,
    MoveDelete,
    Purge,
    Copy,
    /// Unrecognized action, preserved as reported
    Other(String),
}

impl FileAction {
    /// Parse an action string as reported by p4
    pub fn parse(text: &str) -> Self {
        match text {
            "add" => Self::Add,
            "archive" => Self::Archive,
            "branch" => Self::Branch,
            "delete" => Self::Delete,
            "edit" => Self::Edit,
            "integrate" => Self::Integrate,
            "import" => Self::Import,
            "lock" => Self::Lock,
            "move/add" => Self::MoveAdd,
            "move/delete" => Self::MoveDelete,
            "purge" => Self::Purge,
            "copy" => Self::Copy,
            other => Self::Other(other.to_string()),
        }
    }

    /// The action as p4 spells it
    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Archive => "archive",
            Self::Branch => "branch",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::Integrate => "integrate",
            Self::Import => "import",
            Self::Lock => "lock",
            Self::MoveAdd => "move/add",
            Self::MoveDelete => "move/delete",
            Self::Purge => "purge",
            Self::Copy => "copy",
            Self::Other(text) => text,
        }
    }

    /// Check if this is one of the known actions
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for FileAction {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for FileAction {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
