//! Parser for `p4 diff2 -du` output
//!
//! ```text
//! ==== //depot/a.c#4 (text) - //depot/a.c#5 (text) ==== content
//! @@ -1,3 +1,3 @@
//!  unchanged
//! -removed
//! +added
//! ```

use crate::model::{DiffContent, DiffLine, DiffLineKind};

const FILE_HEADER_MARKER: &str = "==== ";
const HUNK_MARKER: &str = "@@";

/// Parse unified diff2 output; `left`/`right` label the compared revisions
pub fn parse_diff2(output: &str, left: &str, right: &str) -> DiffContent {
    let lines = output
        .lines()
        .map(|line| {
            if let Some(header) = line.strip_prefix(FILE_HEADER_MARKER) {
                DiffLine::new(DiffLineKind::FileHeader, header)
            } else if line.starts_with(HUNK_MARKER) {
                DiffLine::new(DiffLineKind::HunkHeader, line)
            } else if let Some(added) = line.strip_prefix('+') {
                DiffLine::new(DiffLineKind::Added, added)
            } else if let Some(deleted) = line.strip_prefix('-') {
                DiffLine::new(DiffLineKind::Deleted, deleted)
            } else {
                DiffLine::new(
                    DiffLineKind::Context,
                    line.strip_prefix(' ').unwrap_or(line),
                )
            }
        })
        .collect();

    DiffContent {
        left: left.to_string(),
        right: right.to_string(),
        lines,
    }
}
