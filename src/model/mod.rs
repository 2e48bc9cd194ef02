//! Data models for p4tl
//!
//! UI-independent data structures representing Perforce file history and
//! revision diffs.

mod action;
mod diff;
mod notification;
mod revision;

pub use action::FileAction;
pub use diff::{DiffContent, DiffLine, DiffLineKind};
pub use notification::{Notification, NotificationKind};
pub use revision::{Direction, IntegrationRecord, RevisionRecord};
