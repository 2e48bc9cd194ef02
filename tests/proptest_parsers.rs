//! Property-based tests for p4 output parsers and the revision presenter
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking
//! and that presented nodes keep their structural guarantees.
//! Reference: https://lib.rs/crates/proptest

use std::rc::Rc;

use proptest::prelude::*;
use p4tl::model::{Direction, FileAction, IntegrationRecord, RevisionRecord};
use p4tl::p4::FileSpec;
use p4tl::p4::parser::{format_time, parse_diff2, parse_filelog, parse_how};
use p4tl::timeline::{RevisionPresenter, ThemeIcon, commands};

// =============================================================================
// Strategy generators for realistic-ish p4 output
// =============================================================================

/// Every action p4 documents, plus a few it doesn't
fn action_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "add",
            "archive",
            "branch",
            "delete",
            "edit",
            "integrate",
            "import",
            "lock",
            "move/add",
            "move/delete",
            "purge",
            "copy",
        ])
        .prop_map(|s| s.to_string()),
        "[a-z]{1,12}",
    ]
}

/// Generate a depot path
fn depot_path_strategy() -> impl Strategy<Value = String> {
    "//depot/[a-z]{1,8}/[a-zA-Z0-9_.-]{1,20}"
}

/// Generate a description (single line, no tag prefix)
fn description_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :_-]{0,60}"
}

fn integration_strategy() -> impl Strategy<Value = IntegrationRecord> {
    (
        action_strategy(),
        prop::bool::ANY,
        depot_path_strategy(),
        "[1-9][0-9]{0,3}",
    )
        .prop_map(|(action, into, file, end_rev)| IntegrationRecord {
            operation: FileAction::parse(&action),
            direction: if into { Direction::Into } else { Direction::From },
            file,
            end_rev,
        })
}

fn revision_strategy() -> impl Strategy<Value = RevisionRecord> {
    (
        "[1-9][0-9]{0,5}",
        "[0-9]{1,4}",
        action_strategy(),
        "[a-z]{1,8}",
        description_strategy(),
        prop::collection::vec(integration_strategy(), 0..4),
    )
        .prop_map(
            |(change, revision, action, user, description, integrations)| RevisionRecord {
                change,
                revision,
                operation: FileAction::parse(&action),
                client: format!("{}-ws", user),
                user,
                date: "2024/01/01 00:00:00".to_string(),
                description,
                integrations,
            },
        )
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Filelog parser should not panic on arbitrary input
    #[test]
    fn filelog_parser_does_not_panic(input in ".*") {
        let _ = parse_filelog(&input);
    }

    /// Filelog parser should not panic on tagged-looking garbage
    #[test]
    fn filelog_parser_handles_tagged_garbage(
        lines in prop::collection::vec("\\.\\.\\. [a-zA-Z]{0,8}[0-9]{0,3}(,[0-9]{0,3})? ?.{0,20}", 0..30)
    ) {
        let _ = parse_filelog(&lines.join("\n"));
    }

    /// diff2 parser should not panic on arbitrary input
    #[test]
    fn diff2_parser_does_not_panic(input in ".*") {
        let _ = parse_diff2(&input, "left", "right");
    }

    /// File spec parsing should not panic and always round-trips through Display
    #[test]
    fn file_spec_parse_round_trips(input in "[a-zA-Z0-9/#@._-]{0,40}") {
        let spec = FileSpec::parse(&input);
        prop_assert_eq!(spec.to_string(), input);
    }

    /// Time formatting should not panic on any input
    #[test]
    fn format_time_does_not_panic(input in ".*") {
        let _ = format_time(&input);
    }
}

// =============================================================================
// Structured input tests: parsers handle well-formed input correctly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Filelog parser returns every well-formed revision, in index order
    #[test]
    fn filelog_parser_handles_structured_input(
        revisions in prop::collection::vec(
            ("[1-9][0-9]{0,5}", action_strategy(), description_strategy()),
            1..10,
        )
    ) {
        let mut output = String::from("... depotFile //depot/main/a.c\n");
        for (i, (change, action, desc)) in revisions.iter().enumerate() {
            output.push_str(&format!(
                "... rev{i} {}\n... change{i} {}\n... action{i} {}\n... user{i} alice\n... desc{i} {}\n",
                revisions.len() - i,
                change,
                action,
                desc,
            ));
        }

        let parsed = parse_filelog(&output);
        prop_assert_eq!(parsed.len(), revisions.len());
        for (record, (change, action, desc)) in parsed.iter().zip(&revisions) {
            prop_assert_eq!(&record.change, change);
            prop_assert_eq!(record.operation.as_str(), action.as_str());
            prop_assert_eq!(record.description.as_str(), desc.trim_end());
        }
    }

    /// `how` values split into verb and direction
    #[test]
    fn how_parser_splits_direction(
        verb in "[a-z]{1,10}",
        word in prop::sample::select(vec!["from", "into", "by"]),
    ) {
        let (action, direction) = parse_how(&format!("{} {}", verb, word));
        prop_assert_eq!(action.as_str(), verb.as_str());
        let expected = if word == "from" { Direction::From } else { Direction::Into };
        prop_assert_eq!(direction, expected);
    }

    /// Action parsing is total and keeps the original text
    #[test]
    fn action_display_keeps_text(text in ".{0,20}") {
        prop_assert_eq!(FileAction::parse(&text).to_string(), text);
    }
}

// =============================================================================
// Presenter properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A revision node is collapsible iff it has integrations
    #[test]
    fn revision_collapsible_iff_integrations(revision in revision_strategy()) {
        let has_integrations = !revision.integrations.is_empty();
        let node = RevisionPresenter::present_revision(&Rc::new(revision), &FileSpec::new("//depot/main/a.c"));
        prop_assert_eq!(node.is_collapsible(), has_integrations);
        prop_assert!(node.tooltip.is_some());
    }

    /// Integration nodes are leaves without tooltip or command
    #[test]
    fn integration_is_leaf(integration in integration_strategy()) {
        let node = RevisionPresenter::present_integration(&integration);
        prop_assert!(!node.is_collapsible());
        prop_assert!(node.tooltip.is_none());
        prop_assert!(node.command.is_none());
        prop_assert_eq!(node.label, integration.operation.to_string());
    }

    /// Only edit revisions with a positive numeric revision get a command
    #[test]
    fn command_only_for_positive_edits(revision in revision_strategy()) {
        let positive = revision.revision.parse::<u64>().is_ok_and(|n| n > 0);
        let is_edit = revision.operation == FileAction::Edit;
        let rev = revision.revision.clone();
        let node = RevisionPresenter::present_revision(&Rc::new(revision), &FileSpec::new("//depot/main/a.c"));

        prop_assert_eq!(node.command.is_some(), is_edit && positive);
        if let Some(command) = node.command {
            prop_assert_eq!(command.id, commands::DIFF_REVISIONS);
            prop_assert_eq!(command.arguments.len(), 2);
            prop_assert_eq!(command.arguments[1].to_string(), format!("//depot/main/a.c#{}", rev));
        }
    }

    /// Unknown actions fall back to the commit icon; known ones never do
    #[test]
    fn icon_mapping_is_total(text in action_strategy()) {
        let action = FileAction::parse(&text);
        let icon = RevisionPresenter::icon_for(&action);
        prop_assert_eq!(icon == ThemeIcon::COMMIT, !action.is_known());
    }

    /// Revision description starts with `#<revision>`
    #[test]
    fn revision_description_starts_with_revision(revision in revision_strategy()) {
        let expected = format!("#{}", revision.revision);
        let node = RevisionPresenter::present_revision(&Rc::new(revision), &FileSpec::new("//depot/main/a.c"));
        let description = node.description.unwrap_or_default();
        prop_assert!(description.starts_with(&expected), "{}", description);
    }
}
