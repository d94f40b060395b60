//! Compilation behavior through the public API.

use drafter_pattern::{compile, CompiledPattern, Flags, Match, Pattern, PatternError, PatternSpec};

// ============================================================================
// Pattern classification
// ============================================================================

#[test]
fn classification_of_common_rule_strings() {
    assert!(PatternSpec::parse("/\\bJENKINS-(\\d+)\\b/g").is_regex());
    assert!(PatternSpec::parse("/foo/").is_regex());
    assert!(!PatternSpec::parse("JENKINS").is_regex());
    assert!(!PatternSpec::parse("/etc/hosts").is_regex());
    assert!(!PatternSpec::parse("").is_regex());
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn empty_literal_compiles() {
    let pattern = compile("").unwrap();
    assert!(pattern.is_global());
}

#[test]
fn literal_with_slashes() {
    let pattern = compile("/usr/bin").unwrap();
    assert_eq!(pattern.find_matches("PATH=/usr/bin:/usr/bin").len(), 2);
}

#[test]
fn flags_survive_compilation() {
    let pattern = compile("/a/gim").unwrap();
    assert_eq!(
        pattern.flags(),
        Flags {
            global: true,
            case_insensitive: true,
            multi_line: true,
            ..Flags::default()
        }
    );
}

#[test]
fn error_messages_name_the_pattern() {
    let err = compile("/a/gg").unwrap_err();
    assert_eq!(err.to_string(), "duplicate flag 'g' in pattern /a/gg");

    let err = compile("/a/J").unwrap_err();
    assert_eq!(err.to_string(), "unsupported flag 'J' in pattern /a/J");

    let err = compile("/[a/").unwrap_err();
    assert!(matches!(err, PatternError::InvalidRegex(_)));
    assert!(err.to_string().starts_with("invalid regex pattern"));
}

#[test]
fn compiled_patterns_compare_by_source() {
    assert_eq!(compile("/a/g").unwrap(), compile("/a/g").unwrap());
    assert_ne!(compile("/a/g").unwrap(), compile("/a/").unwrap());
}

#[test]
fn digit_classes_are_unicode_aware() {
    let haystack = "JENKINS-١٢";

    let unicode = compile("/JENKINS-(\\d+)/g").unwrap();
    let found = unicode.find_matches(haystack);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].group_str(haystack, 1), Some("١٢"));

    for ascii in ["/JENKINS-((?-u:\\d)+)/g", "/JENKINS-([0-9]+)/g"] {
        assert!(compile(ascii).unwrap().find_matches(haystack).is_empty(), "{}", ascii);
    }
}

// ============================================================================
// Custom matchers
// ============================================================================

/// Matches every occurrence of a single byte character.
struct CharMatcher(char);

impl Pattern for CharMatcher {
    fn is_global(&self) -> bool {
        true
    }

    fn find_matches(&self, haystack: &str) -> Vec<Match> {
        haystack
            .match_indices(self.0)
            .map(|(i, s)| Match::new(i..i + s.len(), []))
            .collect()
    }
}

#[test]
fn custom_matcher_behind_trait_object() {
    let matchers: Vec<Box<dyn Pattern>> = vec![
        Box::new(CharMatcher('x')),
        Box::new(compile("/x/").unwrap()),
    ];

    assert_eq!(matchers[0].find_matches("x x x").len(), 3);
    assert_eq!(matchers[1].find_matches("x x x").len(), 1);
}

#[test]
fn compiled_pattern_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledPattern>();
}
