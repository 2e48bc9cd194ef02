//! Diff data model
//!
//! Represents parsed output from `p4 diff2 -du`.

/// Parsed diff between two file revisions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffContent {
    /// Older revision (`path#rev`)
    pub left: String,
    /// Newer revision (`path#rev`)
    pub right: String,
    /// All diff lines (including file headers)
    pub lines: Vec<DiffLine>,
}

impl DiffContent {
    /// Check if any line was added or deleted
    pub fn has_changes(&self) -> bool {
        self.lines
            .iter()
            .any(|l| matches!(l.kind, DiffLineKind::Added | DiffLineKind::Deleted))
    }

    /// Count (added, deleted) lines
    pub fn stats(&self) -> (usize, usize) {
        self.lines.iter().fold((0, 0), |(added, deleted), line| match line.kind {
            DiffLineKind::Added => (added + 1, deleted),
            DiffLineKind::Deleted => (added, deleted + 1),
            _ => (added, deleted),
        })
    }
}

/// A single line in the diff output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Type of this line
    pub kind: DiffLineKind,
    /// Content without the leading diff marker
    pub content: String,
}

impl DiffLine {
    pub fn new(kind: DiffLineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Type of diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// `==== left - right ====` header
    FileHeader,
    /// `@@ -a,b +c,d @@`
    HunkHeader,
    /// Context line (unchanged)
    Context,
    /// Added line
    Added,
    /// Deleted line
    Deleted,
}
