//! p4 command execution layer
//!
//! This module runs p4 commands, parses their tagged output and exposes the
//! file history query the timeline consumes.

pub mod constants;
mod executor;
mod file_spec;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::P4Executor;
pub use file_spec::{FileSpec, RevisionSelector};

use std::future::Future;
use std::io;

use thiserror::Error;

use crate::model::RevisionRecord;

/// Errors that can occur when executing p4 commands
#[derive(Error, Debug)]
pub enum P4Error {
    #[error("p4 command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("No such file: {0}")]
    NoSuchFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("p4 is not installed or not in PATH")]
    P4NotFound,

    #[error("p4 worker exited without a result")]
    WorkerGone,
}

/// Options for a file history query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryOptions {
    /// Follow branch history back through integration sources (`filelog -i`)
    pub follow_branches: bool,
}

/// Source of file revision history
///
/// Returns revisions most-recent-first. Implementations do their own I/O;
/// the returned future is the only suspension point of a refresh.
pub trait HistoryQuery {
    fn file_history(
        &self,
        file: &FileSpec,
        options: HistoryOptions,
    ) -> impl Future<Output = Result<Vec<RevisionRecord>, P4Error>>;
}
