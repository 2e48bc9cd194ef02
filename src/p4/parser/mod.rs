//! p4 output parser
//!
//! Parses p4 command output into structured data.

mod diff;
mod filelog;

pub use diff::parse_diff2;
pub use filelog::{format_time, parse_filelog, parse_how};
