//! p4 command executor
//!
//! Handles running p4 commands and capturing their output.

use std::future::Future;
use std::path::PathBuf;
use std::process::Command;
use std::thread;

use futures::channel::oneshot;
use tracing::{debug, warn};

use super::constants::{self, commands, errors, flags};
use super::parser::{parse_diff2, parse_filelog};
use super::{FileSpec, HistoryOptions, HistoryQuery, P4Error};
use crate::config::P4Settings;
use crate::model::{DiffContent, RevisionRecord};

/// Executor for p4 commands
#[derive(Debug, Clone)]
pub struct P4Executor {
    /// p4 binary to run
    command: PathBuf,
    /// Global connection flags (`-p`, `-c`, `-u`) prepended to every command
    global_args: Vec<String>,
    /// Revision limit for filelog (None = all)
    max_revisions: Option<u32>,
}

impl Default for P4Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl P4Executor {
    /// Create an executor using `p4` from PATH and the ambient P4 environment
    pub fn new() -> Self {
        Self {
            command: PathBuf::from(constants::P4_COMMAND),
            global_args: Vec::new(),
            max_revisions: None,
        }
    }

    /// Create an executor from connection settings
    pub fn with_settings(settings: &P4Settings) -> Self {
        let mut global_args = Vec::new();
        let connection = [
            (flags::PORT, &settings.port),
            (flags::CLIENT, &settings.client),
            (flags::USER, &settings.user),
        ];
        for (flag, value) in connection {
            if let Some(value) = value {
                global_args.push(flag.to_string());
                global_args.push(value.clone());
            }
        }

        Self {
            command: settings.command.clone(),
            global_args,
            max_revisions: settings.max_revisions,
        }
    }

    /// Run a p4 command with the given arguments
    ///
    /// Global connection flags are added before the arguments.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String, P4Error> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.global_args);
        cmd.args(args.iter().map(AsRef::as_ref));

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                P4Error::P4NotFound
            } else {
                P4Error::IoError(e)
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // p4 reports some errors with a zero exit status
        if is_missing_file(&stderr) && stdout.trim().is_empty() {
            return Err(P4Error::NoSuchFile(stderr.trim().to_string()));
        }

        if output.status.success() {
            Ok(stdout)
        } else {
            let exit_code = output.status.code().unwrap_or(-1);
            Err(P4Error::CommandFailed { stderr, exit_code })
        }
    }

    /// Build the arguments for `p4 -ztag filelog`
    pub fn filelog_args(&self, file: &FileSpec, options: HistoryOptions) -> Vec<String> {
        let mut args = vec![
            flags::ZTAG.to_string(),
            commands::FILELOG.to_string(),
            flags::LONG_DESCRIPTION.to_string(),
            flags::WITH_TIME.to_string(),
        ];

        if options.follow_branches {
            args.push(flags::FOLLOW_BRANCHES.to_string());
        }

        if let Some(max) = self.max_revisions {
            args.push(flags::MAX_REVISIONS.to_string());
            args.push(max.to_string());
        }

        args.push(file.to_arg());
        args
    }

    /// Run `p4 -ztag filelog` and parse the result (blocking)
    pub fn filelog(
        &self,
        file: &FileSpec,
        options: HistoryOptions,
    ) -> Result<Vec<RevisionRecord>, P4Error> {
        let output = self.run(&self.filelog_args(file, options))?;
        Ok(parse_filelog(&output))
    }

    /// Run `p4 diff2 -du` between two file revisions
    pub fn diff2(&self, left: &FileSpec, right: &FileSpec) -> Result<String, P4Error> {
        self.run(&[
            commands::DIFF2.to_string(),
            flags::UNIFIED_DIFF.to_string(),
            left.to_arg(),
            right.to_arg(),
        ])
    }

    /// Compare two file revisions and parse the diff (blocking)
    pub fn compare(&self, left: &FileSpec, right: &FileSpec) -> Result<DiffContent, P4Error> {
        let output = self.diff2(left, right)?;
        Ok(parse_diff2(&output, &left.to_string(), &right.to_string()))
    }
}

impl HistoryQuery for P4Executor {
    /// Runs filelog on a worker thread so the caller only suspends on the reply
    fn file_history(
        &self,
        file: &FileSpec,
        options: HistoryOptions,
    ) -> impl Future<Output = Result<Vec<RevisionRecord>, P4Error>> {
        let executor = self.clone();
        let file = file.clone();

        async move {
            debug!(file = %file, ?options, "querying filelog");
            let (reply, rx) = oneshot::channel();
            let worker_file = file.clone();
            thread::Builder::new()
                .name("p4-filelog".to_string())
                .spawn(move || {
                    let _ = reply.send(executor.filelog(&worker_file, options));
                })?;

            let result = rx.await.map_err(|_| P4Error::WorkerGone)?;
            match &result {
                Ok(revisions) => debug!(file = %file, count = revisions.len(), "filelog finished"),
                Err(e) => warn!(file = %file, error = %e, "filelog failed"),
            }
            result
        }
    }
}

/// Check stderr for "file has no history" style errors
fn is_missing_file(stderr: &str) -> bool {
    stderr.contains(errors::NO_SUCH_FILE) || stderr.contains(errors::NOT_IN_CLIENT)
}
