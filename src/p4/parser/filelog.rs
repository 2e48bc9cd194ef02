//! Parser for `p4 -ztag filelog -l -t` output
//!
//! Tagged filelog output is one `... <field><rev>[,<integration>] <value>`
//! line per value. Revision fields are indexed from 0 (most recent);
//! integration fields carry a second index. Multi-line descriptions continue
//! on untagged lines.
//!
//! ```text
//! ... depotFile //depot/main/a.c
//! ... rev0 5
//! ... change0 1234
//! ... action0 edit
//! ... desc0 Fix parser
//! ... how0,0 copy from
//! ... file0,0 //depot/dev/a.c
//! ... erev0,0 #3
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use crate::model::{Direction, FileAction, IntegrationRecord, RevisionRecord};
use crate::p4::constants::{fields, special};

/// Regex for tagged field keys
///
/// Groups:
/// 1. field name
/// 2. revision index
/// 3. integration index (optional)
static FIELD_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(\d+)(?:,(\d+))?$").expect("Invalid filelog field regex")
});

/// Display format for revision timestamps
const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Default)]
struct PartialIntegration {
    how: Option<String>,
    file: Option<String>,
    end_rev: Option<String>,
}

#[derive(Debug, Default)]
struct PartialRevision {
    rev: Option<String>,
    change: Option<String>,
    action: Option<String>,
    time: Option<String>,
    user: Option<String>,
    client: Option<String>,
    desc: Option<String>,
    integrations: BTreeMap<usize, PartialIntegration>,
}

/// Where an untagged continuation line belongs
#[derive(Debug, Clone, Copy)]
enum Continuation {
    None,
    Description(usize),
}

/// Parse `p4 -ztag filelog` output into revisions, most recent first
///
/// Only the first depot file is read. Incomplete revisions and integration
/// records are dropped; unknown fields are ignored.
pub fn parse_filelog(output: &str) -> Vec<RevisionRecord> {
    let mut revisions: BTreeMap<usize, PartialRevision> = BTreeMap::new();
    let mut depot_files = 0;
    let mut continuation = Continuation::None;

    for line in output.lines() {
        let tag = line
            .strip_prefix(special::TAG_PREFIX)
            .map(|tagged| tagged.split_once(' ').unwrap_or((tagged, "")))
            .filter(|(key, _)| *key == fields::DEPOT_FILE || FIELD_KEY_REGEX.is_match(key));

        // Description text may itself start with "... "
        let Some((key, value)) = tag else {
            if let Continuation::Description(index) = continuation
                && let Some(desc) = revisions.get_mut(&index).and_then(|r| r.desc.as_mut())
            {
                desc.push('\n');
                desc.push_str(line);
            }
            continue;
        };
        continuation = Continuation::None;

        if key == fields::DEPOT_FILE {
            depot_files += 1;
            if depot_files > 1 {
                break;
            }
            continue;
        }

        let Some(caps) = FIELD_KEY_REGEX.captures(key) else {
            continue;
        };
        let Ok(rev_index) = caps[2].parse::<usize>() else {
            continue;
        };
        let name = &caps[1];
        let revision = revisions.entry(rev_index).or_default();

        if let Some(integ) = caps.get(3) {
            let Ok(integ_index) = integ.as_str().parse::<usize>() else {
                continue;
            };
            let integration = revision.integrations.entry(integ_index).or_default();
            let value = Some(value.to_string());
            match name {
                fields::HOW => integration.how = value,
                fields::FILE => integration.file = value,
                fields::END_REV => integration.end_rev = value,
                _ => {}
            }
            continue;
        }

        let text = Some(value.to_string());
        match name {
            fields::REV => revision.rev = text,
            fields::CHANGE => revision.change = text,
            fields::ACTION => revision.action = text,
            fields::TIME => revision.time = text,
            fields::USER => revision.user = text,
            fields::CLIENT => revision.client = text,
            fields::DESC => {
                revision.desc = text;
                continuation = Continuation::Description(rev_index);
            }
            _ => {}
        }
    }

    revisions.into_values().filter_map(finish_revision).collect()
}

fn finish_revision(partial: PartialRevision) -> Option<RevisionRecord> {
    let integrations = partial
        .integrations
        .into_values()
        .filter_map(finish_integration)
        .collect();

    Some(RevisionRecord {
        change: partial.change?,
        revision: partial.rev?,
        operation: FileAction::parse(partial.action.as_deref().unwrap_or_default()),
        user: partial.user.unwrap_or_default(),
        client: partial.client.unwrap_or_default(),
        date: partial.time.as_deref().map(format_time).unwrap_or_default(),
        description: partial
            .desc
            .map(|d| d.trim_end().to_string())
            .unwrap_or_default(),
        integrations,
    })
}

fn finish_integration(partial: PartialIntegration) -> Option<IntegrationRecord> {
    let (operation, direction) = parse_how(&partial.how?);
    let end_rev = partial.end_rev?;

    Some(IntegrationRecord {
        operation,
        direction,
        file: partial.file?,
        end_rev: end_rev
            .strip_prefix(special::REVISION_MARKER)
            .unwrap_or(&end_rev)
            .to_string(),
    })
}

/// Split a filelog `how` value into operation and direction
///
/// `"copy from"` → (copy, From); `"branch into"` and `"ignored by"` → Into;
/// a bare verb (`"undid"`) is treated as From.
pub fn parse_how(how: &str) -> (FileAction, Direction) {
    match how.trim().rsplit_once(' ') {
        Some((verb, "from")) => (FileAction::parse(verb), Direction::From),
        Some((verb, "into" | "by")) => (FileAction::parse(verb), Direction::Into),
        _ => (FileAction::parse(how.trim()), Direction::From),
    }
}

/// Format an epoch-seconds `time` value (UTC); other text is returned as-is
pub fn format_time(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
