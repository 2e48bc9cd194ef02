//! File history timeline
//!
//! Turns a file's revision log into a lazily expanded two-level tree
//! (revisions, then their integrations) and keeps it in step with the focused
//! file. This module knows nothing about rendering: hosts consume it through
//! [`TreeDataProvider`] and [`DisplayNode`].

mod controller;
mod node;
mod presenter;
mod provider;
mod signal;

pub use controller::{HistoryTreeController, TrackedFile};
pub use node::{Collapsible, CommandDescriptor, DisplayNode, HistoryItem, ThemeIcon};
pub use presenter::RevisionPresenter;
pub use provider::TreeDataProvider;
pub use signal::{ChangeSignal, Subscription};

use std::path::PathBuf;

use thiserror::Error;

/// Command ids a node can be bound to
pub mod commands {
    /// Compare two revisions of a file; arguments are `[older, newer]`
    pub const DIFF_REVISIONS: &str = "p4tl.diffRevisions";
}

/// Errors raised by the timeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("{0} is not supported by the timeline")]
    UnsupportedOperation(&'static str),
}

/// Host notification that a document's text was edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChange {
    pub file: PathBuf,
}
