//! Custom replacement rules.
//!
//! A [`Replacer`] pairs a search pattern with a replacement string. Rules run
//! one after another, each over the full output of the previous one, so a
//! later rule can match text an earlier rule inserted.
//!
//! ## Replacement syntax
//!
//! | Escape | Inserts |
//! |--------|---------|
//! | `$$` | `$` |
//! | `$&` | the whole match |
//! | `` $` `` | the text before the match |
//! | `$'` | the text after the match |
//! | `$1`..`$99` | a numbered capture group |
//! | `$<name>` | a named capture group |
//!
//! Groups that did not take part in the match insert nothing. A `$` that does
//! not start one of the escapes above is kept literally.

use drafter_pattern::{CompiledPattern, Match, Pattern};
use serde::{Deserialize, Serialize};

/// A search pattern and the text that replaces its matches.
///
/// Deserializes from `{ search, replace }`, compiling `search` on the way in:
///
/// ```
/// use drafter_template::Replacer;
///
/// let rule: Replacer = serde_json::from_str(
///     r#"{ "search": "/\\bJENKINS-(\\d+)\\b/g", "replace": "[JENKINS-$1](https://issues.jenkins.io/browse/JENKINS-$1)" }"#,
/// ).unwrap();
///
/// assert_eq!(
///     rule.apply("Fixes JENKINS-7"),
///     "Fixes [JENKINS-7](https://issues.jenkins.io/browse/JENKINS-7)",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacer<P = CompiledPattern> {
    /// What to look for.
    pub search: P,
    /// What to put in its place.
    pub replace: String,
}

impl Replacer {
    /// Compiles `search` and builds a rule from it.
    pub fn compile(search: &str, replace: impl Into<String>) -> drafter_pattern::Result<Self> {
        Ok(Replacer::new(drafter_pattern::compile(search)?, replace))
    }
}

impl<P: Pattern> Replacer<P> {
    /// Builds a rule from an already compiled pattern.
    pub fn new(search: P, replace: impl Into<String>) -> Self {
        Replacer {
            search,
            replace: replace.into(),
        }
    }

    /// Applies this rule to `haystack`.
    ///
    /// Global patterns replace every match, others only the first. Matches
    /// that overlap an earlier one or fall outside `haystack` are skipped.
    pub fn apply(&self, haystack: &str) -> String {
        let global = self.search.is_global();
        let mut matches = self.search.find_matches(haystack);
        if !global {
            matches.truncate(1);
        }
        tracing::trace!(
            matches = matches.len(),
            global,
            "applying replacement rule"
        );

        if matches.is_empty() {
            return haystack.to_string();
        }

        let mut output = String::with_capacity(haystack.len());
        let mut last = 0;
        for m in &matches {
            let Some(before) = haystack.get(last..m.start()) else {
                continue;
            };
            if haystack.get(m.range()).is_none() {
                continue;
            }
            output.push_str(before);
            expand(&self.replace, m, haystack, &self.search, &mut output);
            last = m.end();
        }
        output.push_str(&haystack[last..]);
        output
    }
}

/// Applies `rules` in order, each to the output of the previous one.
pub fn apply_rules<P: Pattern>(input: String, rules: &[Replacer<P>]) -> String {
    rules.iter().fold(input, |text, rule| rule.apply(&text))
}

/// Writes `replacement` to `dst`, expanding `$` escapes against `m`.
fn expand<P: Pattern>(replacement: &str, m: &Match, haystack: &str, pattern: &P, dst: &mut String) {
    let mut rest = replacement;

    while let Some(dollar) = rest.find('$') {
        dst.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let consumed = match after.as_bytes().first() {
            Some(b'$') => {
                dst.push('$');
                1
            }
            Some(b'&') => {
                dst.push_str(m.as_str(haystack));
                1
            }
            Some(b'`') => {
                dst.push_str(&haystack[..m.start()]);
                1
            }
            Some(b'\'') => {
                dst.push_str(&haystack[m.end()..]);
                1
            }
            Some(b'0'..=b'9') => match group_reference(after, m.group_count()) {
                Some((index, len)) => {
                    dst.push_str(m.group_str(haystack, index).unwrap_or_default());
                    len
                }
                None => {
                    dst.push('$');
                    0
                }
            },
            Some(b'<') if pattern.has_named_groups() => match after.find('>') {
                Some(close) => {
                    let group = pattern
                        .group_index(&after[1..close])
                        .and_then(|index| m.group_str(haystack, index));
                    dst.push_str(group.unwrap_or_default());
                    close + 1
                }
                None => {
                    dst.push('$');
                    0
                }
            },
            _ => {
                dst.push('$');
                0
            }
        };

        rest = &after[consumed..];
    }

    dst.push_str(rest);
}

/// Parses a `$n`/`$nn` group reference at the start of `digits`.
///
/// The two-digit form wins when that group exists. Returns the group index
/// and the number of bytes consumed, or `None` when no group is referenced.
fn group_reference(digits: &str, group_count: usize) -> Option<(usize, usize)> {
    let bytes = digits.as_bytes();
    let digit = |i: usize| {
        bytes
            .get(i)
            .filter(|b| b.is_ascii_digit())
            .map(|b| (b - b'0') as usize)
    };

    let first = digit(0)?;
    if let Some(second) = digit(1) {
        let index = first * 10 + second;
        if (1..=group_count).contains(&index) {
            return Some((index, 2));
        }
    }
    if (1..=group_count).contains(&first) {
        return Some((first, 1));
    }
    None
}
