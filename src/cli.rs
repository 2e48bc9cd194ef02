//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    Config, DocumentChangePolicy, LogLevel, LogSettings, P4Settings, RefreshPolicy,
    TimelineConfig,
};

/// Browse the Perforce history of files in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "p4tl", version, about)]
pub struct Cli {
    /// Files to track; `]`/`[` moves focus between them
    pub files: Vec<PathBuf>,

    /// p4 binary
    #[arg(long, default_value = "p4")]
    pub p4: PathBuf,

    /// Perforce server address (defaults to P4PORT)
    #[arg(short = 'p', long)]
    pub port: Option<String>,

    /// Client workspace (defaults to P4CLIENT)
    #[arg(short = 'c', long)]
    pub client: Option<String>,

    /// Perforce user (defaults to P4USER)
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Maximum number of revisions to fetch per file
    #[arg(short = 'm', long)]
    pub max_revisions: Option<u32>,

    /// How overlapping history refreshes are applied
    #[arg(long, default_value = "last-write-wins", value_enum)]
    pub refresh_policy: RefreshPolicy,

    /// What to do when a document edit is reported
    #[arg(long, default_value = "ignore", value_enum)]
    pub document_changes: DocumentChangePolicy,

    /// Log verbosity
    #[arg(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            files: cli.files,
            p4: P4Settings {
                command: cli.p4,
                port: cli.port,
                client: cli.client,
                user: cli.user,
                max_revisions: cli.max_revisions,
            },
            timeline: TimelineConfig {
                refresh_policy: cli.refresh_policy,
                document_changes: cli.document_changes,
            },
            log: LogSettings {
                level: cli.log_level,
                file: cli.log_file,
            },
        }
    }
}
