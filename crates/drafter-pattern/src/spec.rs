//! Pattern specifications and flags.
//!
//! A pattern is authored as a plain string. Two shapes are recognized:
//!
//! - `/body/flags` - a delimited regular expression. `flags` is a (possibly
//!   empty) run of the letters `AJUXgimsux`.
//! - anything else - a literal, matched verbatim.
//!
//! Parsing never fails: a string that does not have the delimited shape is
//! simply a literal. Flag validation happens later, in [`Flags::parse`].

use std::fmt;

use crate::error::{PatternError, Result};

/// Letters accepted in the flag position of a delimited pattern.
///
/// Strings whose trailing segment uses any other letter are treated as
/// literals, so `/usr/bin` stays a path rather than a regex with flags.
const FLAG_LETTERS: &str = "AJUXgimsux";

/// A parsed, not yet compiled, pattern specification.
///
/// # Example
///
/// ```
/// use drafter_pattern::PatternSpec;
///
/// assert_eq!(
///     PatternSpec::parse("/JENKINS-(\\d+)/g"),
///     PatternSpec::Regex { source: "JENKINS-(\\d+)", flags: "g" },
/// );
/// assert_eq!(PatternSpec::parse("JENKINS"), PatternSpec::Literal("JENKINS"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSpec<'a> {
    /// Text matched verbatim.
    Literal(&'a str),
    /// A delimited regular expression.
    Regex {
        /// The text between the delimiting slashes.
        source: &'a str,
        /// The flag letters after the closing slash.
        flags: &'a str,
    },
}

impl<'a> PatternSpec<'a> {
    /// Classifies a pattern string.
    pub fn parse(spec: &'a str) -> Self {
        let Some(inner) = spec.strip_prefix('/') else {
            return PatternSpec::Literal(spec);
        };
        let Some(close) = inner.rfind('/') else {
            return PatternSpec::Literal(spec);
        };

        let (source, flags) = (&inner[..close], &inner[close + 1..]);
        if source.is_empty() || !flags.chars().all(|c| FLAG_LETTERS.contains(c)) {
            return PatternSpec::Literal(spec);
        }

        PatternSpec::Regex { source, flags }
    }

    /// Returns `true` for the delimited regex shape.
    pub fn is_regex(&self) -> bool {
        matches!(self, PatternSpec::Regex { .. })
    }
}

/// Matching options carried by a compiled pattern.
///
/// | Letter | Field |
/// |--------|-------|
/// | `g` | `global` |
/// | `i` | `case_insensitive` |
/// | `m` | `multi_line` |
/// | `s` | `dot_matches_new_line` |
/// | `x` | `ignore_whitespace` |
/// | `u` | accepted, Unicode is always enabled |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Replace every match instead of only the first.
    pub global: bool,
    /// Case-insensitive matching.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Whitespace and `#` comments in the pattern are ignored.
    pub ignore_whitespace: bool,
    /// The `u` letter was given.
    pub unicode: bool,
}

impl Flags {
    /// Flags used for literal patterns: global, nothing else.
    pub fn literal() -> Self {
        Flags {
            global: true,
            ..Flags::default()
        }
    }

    /// Parses a run of flag letters.
    ///
    /// `spec` is the full pattern string and is only used in error messages.
    pub fn parse(letters: &str, spec: &str) -> Result<Self> {
        let mut flags = Flags::default();

        for flag in letters.chars() {
            let slot = match flag {
                'g' => &mut flags.global,
                'i' => &mut flags.case_insensitive,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_matches_new_line,
                'x' => &mut flags.ignore_whitespace,
                'u' => &mut flags.unicode,
                _ => {
                    return Err(PatternError::UnsupportedFlag {
                        flag,
                        spec: spec.to_string(),
                    })
                }
            };
            if *slot {
                return Err(PatternError::DuplicateFlag {
                    flag,
                    spec: spec.to_string(),
                });
            }
            *slot = true;
        }

        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.unicode, 'u'),
            (self.ignore_whitespace, 'x'),
        ];
        for (set, letter) in letters {
            if set {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
