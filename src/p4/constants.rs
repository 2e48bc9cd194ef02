//! p4-specific constants
//!
//! Centralized definitions for p4 command names, flags, and tagged field names.

/// p4 command binary name
pub const P4_COMMAND: &str = "p4";

/// p4 subcommands
pub mod commands {
    pub const FILELOG: &str = "filelog";
    pub const DIFF2: &str = "diff2";
}

/// p4 flags
pub mod flags {
    /// Tagged output (global flag, stable for parsing)
    pub const ZTAG: &str = "-ztag";
    /// Server address (global flag)
    pub const PORT: &str = "-p";
    /// Client workspace (global flag)
    pub const CLIENT: &str = "-c";
    /// User (global flag)
    pub const USER: &str = "-u";
    /// Full changelist descriptions (filelog)
    pub const LONG_DESCRIPTION: &str = "-l";
    /// Include time with the date (filelog)
    pub const WITH_TIME: &str = "-t";
    /// Follow branch history (filelog)
    pub const FOLLOW_BRANCHES: &str = "-i";
    /// Maximum number of revisions (filelog)
    pub const MAX_REVISIONS: &str = "-m";
    /// Unified diff output (diff2)
    pub const UNIFIED_DIFF: &str = "-du";
}

/// Field names in `p4 -ztag filelog` output
pub mod fields {
    pub const DEPOT_FILE: &str = "depotFile";
    pub const REV: &str = "rev";
    pub const CHANGE: &str = "change";
    pub const ACTION: &str = "action";
    pub const TIME: &str = "time";
    pub const USER: &str = "user";
    pub const CLIENT: &str = "client";
    pub const DESC: &str = "desc";
    pub const HOW: &str = "how";
    pub const FILE: &str = "file";
    pub const END_REV: &str = "erev";
}

/// Special p4 values
pub mod special {
    /// Prefix of every tagged output line
    pub const TAG_PREFIX: &str = "... ";
    /// Revision selector marker (`file#3`)
    pub const REVISION_MARKER: char = '#';
    /// Changelist selector marker (`file@1234`)
    pub const CHANGE_MARKER: char = '@';
    /// Prefix of depot syntax paths
    pub const DEPOT_PREFIX: &str = "//";
    /// Characters p4 reserves in file names, with their escapes (`%` first)
    pub const PATH_ESCAPES: [(char, &str); 4] =
        [('%', "%25"), ('@', "%40"), ('#', "%23"), ('*', "%2A")];
}

/// Error detection patterns in p4 output
pub mod errors {
    /// Pattern indicating the file has no history on the server
    pub const NO_SUCH_FILE: &str = "no such file(s)";
    /// Pattern indicating the file is outside the client view
    pub const NOT_IN_CLIENT: &str = "not in client view";
}
