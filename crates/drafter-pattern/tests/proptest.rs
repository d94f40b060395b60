//! Property-based tests for pattern compilation using proptest.

use drafter_pattern::{compile, Pattern, PatternSpec};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

// Text without slashes, so it can never take the delimited shape.
fn literal_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .*+?()\\[\\]{}|^$\\\\-]{1,12}"
}

fn haystack() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .*+?()|^$-]{0,60}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Strings without a leading slash are always literals.
    #[test]
    fn unslashed_is_literal(text in literal_text()) {
        prop_assert_eq!(PatternSpec::parse(&text), PatternSpec::Literal(&text));
    }

    /// A literal compiles no matter which regex metacharacters it contains.
    #[test]
    fn literal_always_compiles(text in literal_text()) {
        prop_assert!(compile(&text).is_ok());
    }

    /// A literal finds exactly the non-overlapping occurrences `str::matches` finds.
    #[test]
    fn literal_matches_like_str_matches(text in literal_text(), hay in haystack()) {
        let pattern = compile(&text).unwrap();
        let found: Vec<_> = pattern
            .find_matches(&hay)
            .iter()
            .map(|m| m.start())
            .collect();
        let expected: Vec<_> = hay.match_indices(text.as_str()).map(|(i, _)| i).collect();
        prop_assert_eq!(found, expected);
    }

    /// Without `g` at most one match is reported, and it is the leftmost one.
    #[test]
    fn non_global_reports_first(word in "[a-z]{1,4}", hay in "[a-z ]{0,60}") {
        let global = compile(&format!("/{}/g", word)).unwrap();
        let first = compile(&format!("/{}/", word)).unwrap();

        let all = global.find_matches(&hay);
        let one = first.find_matches(&hay);

        prop_assert!(one.len() <= 1);
        prop_assert_eq!(one.first(), all.first());
    }

    /// Matches are ordered and never overlap.
    #[test]
    fn global_matches_are_ordered(word in "[a-z]{1,3}", hay in "[a-z]{0,60}") {
        let pattern = compile(&format!("/{}/g", word)).unwrap();
        let found = pattern.find_matches(&hay);
        for pair in found.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }
}
