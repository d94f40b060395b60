//! Compiled patterns backed by [`regex::Regex`].

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::matcher::{Match, Pattern};
use crate::spec::{Flags, PatternSpec};

/// A pattern ready for matching.
///
/// Remembers the specification it was compiled from, so it serializes back
/// to the same string.
///
/// # Example
///
/// ```
/// use drafter_pattern::{compile, Pattern};
///
/// let pattern = compile("/JENKINS-(\\d+)/g").unwrap();
/// assert!(pattern.is_global());
///
/// let found = pattern.find_matches("JENKINS-1 and JENKINS-22");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].group_str("JENKINS-1 and JENKINS-22", 1), Some("22"));
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    flags: Flags,
    source: String,
}

/// Compiles a pattern specification.
///
/// Literals become global, escaped regexes. Delimited `/body/flags` strings
/// are compiled with their flags applied.
pub fn compile(spec: &str) -> Result<CompiledPattern> {
    let compiled = match PatternSpec::parse(spec) {
        PatternSpec::Literal(text) => CompiledPattern::literal(text)?,
        PatternSpec::Regex { source, flags } => {
            let flags = Flags::parse(flags, spec)?;
            CompiledPattern::build(source, flags, spec.to_string())?
        }
    };
    tracing::trace!(spec, global = compiled.is_global(), "compiled pattern");
    Ok(compiled)
}

impl CompiledPattern {
    /// A global pattern matching `text` verbatim.
    pub fn literal(text: &str) -> Result<Self> {
        Self::build(&regex::escape(text), Flags::literal(), text.to_string())
    }

    /// Wraps an already built regex.
    pub fn from_regex(regex: Regex, global: bool) -> Self {
        let flags = Flags {
            global,
            ..Flags::default()
        };
        let source = format!("/{}/{}", regex.as_str(), flags);
        CompiledPattern {
            regex,
            flags,
            source,
        }
    }

    fn build(pattern: &str, flags: Flags, source: String) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .build()?;

        Ok(CompiledPattern {
            regex,
            flags,
            source,
        })
    }

    /// The specification string this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags in effect.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The underlying regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl Pattern for CompiledPattern {
    fn is_global(&self) -> bool {
        self.flags.global
    }

    fn find_matches(&self, haystack: &str) -> Vec<Match> {
        let limit = if self.flags.global { usize::MAX } else { 1 };
        self.regex
            .captures_iter(haystack)
            .take(limit)
            .map(|caps| Match::from_captures(&caps))
            .collect()
    }

    fn group_index(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|group| group == Some(name))
    }

    fn has_named_groups(&self) -> bool {
        self.regex.capture_names().any(|group| group.is_some())
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for CompiledPattern {
    type Err = crate::error::PatternError;

    fn from_str(s: &str) -> Result<Self> {
        compile(s)
    }
}

impl Serialize for CompiledPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for CompiledPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        compile(&spec).map_err(serde::de::Error::custom)
    }
}
