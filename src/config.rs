//! Runtime configuration
//!
//! Built from the command line (see [`crate::cli::Cli`]). Anything not set
//! explicitly is left to p4's own environment (`P4PORT`, `P4CLIENT`, ...).

use std::path::PathBuf;

use clap::ValueEnum;

use crate::p4::constants::P4_COMMAND;

/// p4 connection and query settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P4Settings {
    /// p4 binary to run
    pub command: PathBuf,
    /// Server address (`-p`)
    pub port: Option<String>,
    /// Client workspace (`-c`)
    pub client: Option<String>,
    /// User (`-u`)
    pub user: Option<String>,
    /// Maximum revisions per filelog (`-m`)
    pub max_revisions: Option<u32>,
}

impl Default for P4Settings {
    fn default() -> Self {
        Self {
            command: PathBuf::from(P4_COMMAND),
            port: None,
            client: None,
            user: None,
            max_revisions: None,
        }
    }
}

/// How overlapping history refreshes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RefreshPolicy {
    /// Whichever query resolves last replaces the state
    #[default]
    LastWriteWins,
    /// Results older than the currently applied query are discarded
    LatestRequest,
}

/// What to do when the host reports a document edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocumentChangePolicy {
    /// Edits are ignored; the timeline follows focus only
    #[default]
    Ignore,
    /// Edits are reported as an unsupported operation
    Reject,
}

/// Timeline controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimelineConfig {
    pub refresh_policy: RefreshPolicy,
    pub document_changes: DocumentChangePolicy,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Logging settings
///
/// The terminal belongs to the UI, so logs are only written to a file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Files to track, in focus order
    pub files: Vec<PathBuf>,
    pub p4: P4Settings,
    pub timeline: TimelineConfig,
    pub log: LogSettings,
}
