//! Revision (filelog entry) data model

use std::fmt;

use super::FileAction;

/// Direction of an integration relative to the tracked file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Changes flowed from the tracked file into the other file
    Into,
    /// Changes flowed from the other file into the tracked file
    From,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Into => "into",
            Direction::From => "from",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-branch integration record attached to a revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationRecord {
    /// How the integration happened (e.g. "branch", "copy", "merge")
    pub operation: FileAction,
    pub direction: Direction,
    /// Depot path of the other file
    pub file: String,
    /// End revision of the other file (without the leading `#`)
    pub end_rev: String,
}

/// One revision of the tracked file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevisionRecord {
    /// Changelist number
    pub change: String,

    /// File revision number, as reported (not reformatted)
    pub revision: String,

    /// Action recorded for this revision
    pub operation: FileAction,

    /// Submitting user
    pub user: String,

    /// Client workspace the change was submitted from
    pub client: String,

    /// Submission time, formatted for display
    pub date: String,

    /// Full changelist description
    pub description: String,

    /// Integration records, in the order p4 reported them
    pub integrations: Vec<IntegrationRecord>,
}

impl RevisionRecord {
    /// Check if this revision has integration records
    pub fn has_integrations(&self) -> bool {
        !self.integrations.is_empty()
    }

    /// First line of the description
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("").trim_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_revision() -> RevisionRecord {
        RevisionRecord {
            change: "12345".to_string(),
            revision: "3".to_string(),
            operation: FileAction::Edit,
            user: "alice".to_string(),
            client: "alice-ws".to_string(),
            date: "2024/01/29 15:30:00".to_string(),
            description: "Fix parser\n\nHandles empty input.".to_string(),
            integrations: Vec::new(),
        }
    }

    #[test]
    fn test_summary_first_line() {
        assert_eq!(sample_revision().summary(), "Fix parser");
    }

    #[test]
    fn test_summary_empty_description() {
        let revision = RevisionRecord {
            description: String::new(),
            ..sample_revision()
        };
        assert_eq!(revision.summary(), "");
    }

    #[test]
    fn test_has_integrations() {
        let mut revision = sample_revision();
        assert!(!revision.has_integrations());

        revision.integrations.push(IntegrationRecord {
            operation: FileAction::Branch,
            direction: Direction::Into,
            file: "//depot/rel/a.c".to_string(),
            end_rev: "1".to_string(),
        });
        assert!(revision.has_integrations());
    }

    #[test]
    fn test_direction_words() {
        assert_eq!(Direction::Into.to_string(), "into");
        assert_eq!(Direction::From.to_string(), "from");
    }
}
