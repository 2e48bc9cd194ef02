//! Revision presenter
//!
//! Pure mapping from history records to [`DisplayNode`]s. No state, no I/O,
//! never fails: unknown actions fall back to the commit icon.

use std::rc::Rc;

use super::commands;
use super::node::{Collapsible, CommandDescriptor, DisplayNode, HistoryItem, ThemeIcon};
use crate::model::{FileAction, IntegrationRecord, RevisionRecord};
use crate::p4::FileSpec;

/// Builds display nodes for revisions and integrations
pub struct RevisionPresenter;

impl RevisionPresenter {
    /// Icon for a file action
    pub fn icon_for(action: &FileAction) -> ThemeIcon {
        match action {
            FileAction::Add | FileAction::MoveAdd => ThemeIcon::ADD,
            FileAction::Archive => ThemeIcon::ARCHIVE,
            FileAction::Branch => ThemeIcon::BRANCH,
            FileAction::Delete => ThemeIcon::DELETE_CELL,
            FileAction::Edit => ThemeIcon::EDIT,
            FileAction::Integrate => ThemeIcon::QUEUED,
            FileAction::Import => ThemeIcon::RUN_ALL,
            FileAction::Lock => ThemeIcon::LOCK,
            FileAction::MoveDelete => ThemeIcon::DELETE,
            FileAction::Purge => ThemeIcon::DEBUG,
            FileAction::Copy => ThemeIcon::EXPLORER,
            FileAction::Other(_) => ThemeIcon::COMMIT,
        }
    }

    /// Present any history item; `file` is the tracked file
    pub fn present(item: &HistoryItem, file: &FileSpec) -> DisplayNode {
        match item {
            HistoryItem::Revision(revision) => Self::present_revision(revision, file),
            HistoryItem::Integration(integration) => Self::present_integration(integration),
        }
    }

    /// Present a revision of `file`
    ///
    /// The description is `#<rev>` and the first line of the change
    /// description, sized for a single tree row. The full description is
    /// kept in the tooltip.
    pub fn present_revision(revision: &Rc<RevisionRecord>, file: &FileSpec) -> DisplayNode {
        let collapsible = if revision.has_integrations() {
            Collapsible::Collapsed
        } else {
            Collapsible::None
        };

        DisplayNode {
            label: revision.change.clone(),
            description: Some(
                format!("#{} {}", revision.revision, revision.summary())
                    .trim_end()
                    .to_string(),
            ),
            icon: Self::icon_for(&revision.operation),
            tooltip: Some(Self::tooltip(revision)),
            collapsible,
            command: Self::compare_command(revision, file),
            source: HistoryItem::Revision(Rc::clone(revision)),
        }
    }

    /// Present an integration record (always a leaf)
    pub fn present_integration(integration: &IntegrationRecord) -> DisplayNode {
        DisplayNode {
            label: integration.operation.to_string(),
            description: Some(format!(
                "{} {} {}#{}",
                integration.operation, integration.direction, integration.file, integration.end_rev
            )),
            icon: Self::icon_for(&integration.operation),
            tooltip: None,
            collapsible: Collapsible::None,
            command: None,
            source: HistoryItem::Integration(integration.clone()),
        }
    }

    /// Markdown tooltip: header line, date, then the full description
    fn tooltip(revision: &RevisionRecord) -> String {
        format!(
            "#{}-{} {} ({})\n\n{}\n\n\n{}",
            revision.revision,
            revision.operation,
            revision.user,
            revision.client,
            revision.date,
            revision.description
        )
    }

    /// Compare with the previous revision, for edits only
    ///
    /// Revisions that are not a positive number get no command.
    fn compare_command(revision: &RevisionRecord, file: &FileSpec) -> Option<CommandDescriptor> {
        if revision.operation != FileAction::Edit {
            return None;
        }
        let number = revision.revision.parse::<u64>().ok().filter(|&n| n > 0)?;
        let file = file.without_revision();

        Some(CommandDescriptor {
            id: commands::DIFF_REVISIONS,
            title: format!("Compare #{} with #{}", number - 1, revision.revision),
            arguments: vec![
                file.at_revision((number - 1).to_string()),
                file.at_revision(revision.revision.clone()),
            ],
        })
    }
}
