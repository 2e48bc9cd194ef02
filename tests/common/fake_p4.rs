//! FakeP4 helper for integration tests.
//!
//! A shell script standing in for `p4`: it records each invocation and
//! replies with canned output per subcommand.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

use p4tl::config::P4Settings;

const SCRIPT: &str = r#"#!/bin/sh
dir=$(dirname "$0")
printf '%s\n' "$*" >> "$dir/calls.log"
if [ -f "$dir/stderr.out" ]; then
    cat "$dir/stderr.out" >&2
    exit "$(cat "$dir/exit.code")"
fi
for arg in "$@"; do
    case "$arg" in
        filelog|diff2)
            cat "$dir/$arg.out"
            exit 0
            ;;
    esac
done
echo "unexpected command: $*" >&2
exit 1
"#;

/// A temporary directory holding a fake `p4` script.
///
/// Cleaned up when dropped.
pub struct FakeP4 {
    dir: TempDir,
}

impl FakeP4 {
    /// Create a fake p4 with empty replies.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let script = dir.path().join("p4");
        fs::write(&script, SCRIPT).expect("Failed to write fake p4");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake p4 executable");

        let fake = Self { dir };
        fake.reply("filelog", "");
        fake.reply("diff2", "");
        fake
    }

    /// Set stdout for a subcommand (`filelog` or `diff2`).
    pub fn reply(&self, subcommand: &str, stdout: &str) {
        fs::write(self.dir.path().join(format!("{}.out", subcommand)), stdout)
            .expect("Failed to write fake reply");
    }

    /// Make every invocation fail with `stderr` and `exit_code`.
    pub fn fail(&self, stderr: &str, exit_code: i32) {
        fs::write(self.dir.path().join("stderr.out"), stderr).expect("Failed to write stderr");
        fs::write(self.dir.path().join("exit.code"), exit_code.to_string())
            .expect("Failed to write exit code");
    }

    /// Path to the fake executable.
    pub fn command(&self) -> PathBuf {
        self.dir.path().join("p4")
    }

    /// Settings pointing at the fake executable.
    pub fn settings(&self) -> P4Settings {
        P4Settings {
            command: self.command(),
            ..P4Settings::default()
        }
    }

    /// Argument lines of every invocation so far.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
