//! Property tests: what you preview is what you save

use botcmd_core::{apply, render_preview, CommandTable, EmptySavePolicy, Mutation, PREVIEW_PLACEHOLDER};
use proptest::prelude::*;

fn raw_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            "[ \t]{0,2}[a-zA-Z0-9!?]{1,8}( [a-z]{1,5})?[ \t]{0,2}",
        ],
        0..12,
    )
}

fn saved_lines(raw: &[String]) -> Option<Vec<String>> {
    let (table, _) = apply(
        CommandTable::new(),
        Mutation::Add {
            name: "cmd".to_string(),
        },
        EmptySavePolicy::Reject,
    )
    .ok()?;
    let (table, _) = apply(
        table,
        Mutation::SaveResponses {
            name: "cmd".to_string(),
            lines: raw.to_vec(),
        },
        EmptySavePolicy::Reject,
    )
    .ok()?;
    table.get("cmd").map(|c| c.responses().to_vec())
}

proptest! {
    #[test]
    fn preview_matches_saved_lines(raw in raw_lines()) {
        let preview = render_preview(&raw);
        match saved_lines(&raw) {
            Some(lines) => prop_assert_eq!(preview, lines.join("\n")),
            None => prop_assert_eq!(preview, PREVIEW_PLACEHOLDER),
        }
    }

    #[test]
    fn saved_lines_are_ordered_trimmed_subsequence(raw in raw_lines()) {
        let expected: Vec<String> = raw
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        match saved_lines(&raw) {
            Some(lines) => prop_assert_eq!(lines, expected),
            None => prop_assert!(expected.is_empty()),
        }
    }
}
