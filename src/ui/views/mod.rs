//! View components
//!
//! Each view represents a screen in the application.

mod diff;
mod timeline;

pub use diff::{DiffAction, DiffView};
pub use timeline::{TimelineAction, TimelineView, TreeRow};
