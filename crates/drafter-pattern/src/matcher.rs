//! The matching interface consumed by replacement rules.
//!
//! [`Pattern`] is the seam between pattern compilation and text rewriting.
//! A rule only needs to know whether its pattern is global and where the
//! matches and their capture groups are; how the pattern was authored does
//! not matter. [`CompiledPattern`](crate::CompiledPattern) is the stock
//! implementation.

use std::ops::Range;

/// A single match with the byte spans of its capture groups.
///
/// Group `0` is the whole match. Groups that did not participate in the
/// match have no span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    groups: Vec<Option<Range<usize>>>,
}

impl Match {
    /// Creates a match from the whole-match span and the spans of groups `1..`.
    pub fn new(span: Range<usize>, groups: impl IntoIterator<Item = Option<Range<usize>>>) -> Self {
        let mut all = vec![Some(span)];
        all.extend(groups);
        Match { groups: all }
    }

    pub(crate) fn from_captures(caps: &regex::Captures<'_>) -> Self {
        Match {
            groups: caps.iter().map(|m| m.map(|m| m.range())).collect(),
        }
    }

    /// Byte span of the whole match.
    pub fn range(&self) -> Range<usize> {
        self.groups[0].clone().unwrap_or(0..0)
    }

    /// Start offset of the whole match.
    pub fn start(&self) -> usize {
        self.range().start
    }

    /// End offset of the whole match.
    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Number of capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.groups.len() - 1
    }

    /// Span of group `index`, if the group exists and participated.
    pub fn group(&self, index: usize) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }

    /// Text of group `index` within `haystack`.
    ///
    /// `None` also when the span does not fit `haystack`.
    pub fn group_str<'h>(&self, haystack: &'h str, index: usize) -> Option<&'h str> {
        self.group(index).and_then(|r| haystack.get(r))
    }

    /// Text of the whole match within `haystack`, empty if the span does not fit.
    pub fn as_str<'h>(&self, haystack: &'h str) -> &'h str {
        haystack.get(self.range()).unwrap_or_default()
    }
}

/// A compiled matcher that replacement rules can run.
pub trait Pattern {
    /// Whether every match is replaced (`true`) or only the first.
    fn is_global(&self) -> bool;

    /// Finds matches in `haystack`, left to right and non-overlapping.
    ///
    /// Non-global patterns return at most one match.
    fn find_matches(&self, haystack: &str) -> Vec<Match>;

    /// Index of the capture group called `name`.
    fn group_index(&self, _name: &str) -> Option<usize> {
        None
    }

    /// Whether the pattern declares any named group.
    fn has_named_groups(&self) -> bool {
        false
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn is_global(&self) -> bool {
        (**self).is_global()
    }

    fn find_matches(&self, haystack: &str) -> Vec<Match> {
        (**self).find_matches(haystack)
    }

    fn group_index(&self, name: &str) -> Option<usize> {
        (**self).group_index(name)
    }

    fn has_named_groups(&self) -> bool {
        (**self).has_named_groups()
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn is_global(&self) -> bool {
        (**self).is_global()
    }

    fn find_matches(&self, haystack: &str) -> Vec<Match> {
        (**self).find_matches(haystack)
    }

    fn group_index(&self, name: &str) -> Option<usize> {
        (**self).group_index(name)
    }

    fn has_named_groups(&self) -> bool {
        (**self).has_named_groups()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_accessors() {
        let m = Match::new(5..12, [Some(8..12), None]);
        assert_eq!(m.range(), 5..12);
        assert_eq!(m.start(), 5);
        assert_eq!(m.end(), 12);
        assert_eq!(m.group_count(), 2);
        assert_eq!(m.group(0), Some(5..12));
        assert_eq!(m.group(1), Some(8..12));
        assert_eq!(m.group(2), None);
        assert_eq!(m.group(3), None);
    }

    #[test]
    fn match_text_lookup() {
        let haystack = "body JENKINS-1234 end";
        let m = Match::new(5..17, [Some(13..17)]);
        assert_eq!(m.as_str(haystack), "JENKINS-1234");
        assert_eq!(m.group_str(haystack, 1), Some("1234"));
        assert_eq!(m.group_str(haystack, 2), None);
    }

    #[test]
    fn spans_outside_haystack_yield_nothing() {
        let m = Match::new(2..40, [Some(30..40)]);
        assert_eq!(m.as_str("short"), "");
        assert_eq!(m.group_str("short", 1), None);
    }

    struct Fixed;

    impl Pattern for Fixed {
        fn is_global(&self) -> bool {
            true
        }

        fn find_matches(&self, _haystack: &str) -> Vec<Match> {
            vec![Match::new(0..1, [])]
        }
    }

    #[test]
    fn trait_defaults_and_forwarding() {
        let boxed: Box<dyn Pattern> = Box::new(Fixed);
        assert!(boxed.is_global());
        assert!(!boxed.has_named_groups());
        assert_eq!(boxed.group_index("x"), None);
        assert_eq!((&Fixed).find_matches("abc").len(), 1);
    }
}
