//! File specifications (`path#rev`, `path@change`)

use std::fmt;
use std::path::Path;

use super::constants::special;

/// Revision part of a file specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionSelector {
    /// `#n` file revision
    Number(String),
    /// `@n` changelist
    Change(String),
}

/// A file identified by path, optionally pinned to a revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Depot path (`//depot/...`) or local path
    pub path: String,
    pub revision: Option<RevisionSelector>,
}

impl FileSpec {
    /// Create a file spec without a revision
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            revision: None,
        }
    }

    /// Parse `path`, `path#rev` or `path@change`
    ///
    /// Only a selector after the last path separator is recognized.
    pub fn parse(text: &str) -> Self {
        let name_start = text.rfind(['/', '\\']).map_or(0, |i| i + 1);
        let name = &text[name_start..];

        let Some(marker) = name.find([special::REVISION_MARKER, special::CHANGE_MARKER]) else {
            return Self::new(text);
        };

        let split = name_start + marker;
        let value = text[split + 1..].to_string();
        let revision = if text[split..].starts_with(special::REVISION_MARKER) {
            RevisionSelector::Number(value)
        } else {
            RevisionSelector::Change(value)
        };

        Self {
            path: text[..split].to_string(),
            revision: Some(revision),
        }
    }

    /// Resolve a focused file into its revision-less identity
    ///
    /// Local paths are literal file names: `@` and `#` in them are part of the
    /// name, and the path is made absolute (no filesystem access). Depot paths
    /// are already in p4 syntax, so a trailing selector is dropped.
    pub fn from_path(path: &Path) -> Self {
        let text = path.to_string_lossy();
        if text.starts_with(special::DEPOT_PREFIX) {
            return Self::parse(&text).without_revision();
        }
        match std::path::absolute(path) {
            Ok(absolute) => Self::new(absolute.to_string_lossy()),
            Err(_) => Self::new(text),
        }
    }

    /// Render as a p4 command argument
    ///
    /// Local paths get `%`, `@`, `#` and `*` escaped (`%25`, `%40`, `%23`,
    /// `%2A`); depot paths are passed through as written.
    pub fn to_arg(&self) -> String {
        let mut arg = if self.is_depot_path() {
            self.path.clone()
        } else {
            escape_path(&self.path)
        };
        match &self.revision {
            Some(RevisionSelector::Number(rev)) => {
                arg.push(special::REVISION_MARKER);
                arg.push_str(rev);
            }
            Some(RevisionSelector::Change(change)) => {
                arg.push(special::CHANGE_MARKER);
                arg.push_str(change);
            }
            None => {}
        }
        arg
    }

    /// The same file with any revision selector removed
    pub fn without_revision(&self) -> Self {
        Self::new(self.path.clone())
    }

    /// The same file at file revision `rev`
    pub fn at_revision(&self, rev: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            revision: Some(RevisionSelector::Number(rev.into())),
        }
    }

    /// Check if the path uses depot syntax
    pub fn is_depot_path(&self) -> bool {
        self.path.starts_with(special::DEPOT_PREFIX)
    }

    /// File name component, for titles
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.path)
    }
}

fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        match special::PATH_ESCAPES.iter().find(|(raw, _)| *raw == c) {
            Some((_, code)) => escaped.push_str(code),
            None => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        match &self.revision {
            Some(RevisionSelector::Number(rev)) => write!(f, "{}{}", special::REVISION_MARKER, rev),
            Some(RevisionSelector::Change(change)) => {
                write!(f, "{}{}", special::CHANGE_MARKER, change)
            }
            None => Ok(()),
        }
    }
}
