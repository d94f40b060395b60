//! Pattern compiler for replacement rules.
//!
//! Replacement rules are authored as plain strings. This crate turns those
//! strings into matchers:
//!
//! - A delimited string `/body/flags` compiles to a regular expression with
//!   the given flags. `g` makes it replace every match; without `g` only the
//!   first match is replaced.
//! - Anything else is a literal and matches verbatim, everywhere.
//!
//! # Quick Start
//!
//! ```rust
//! use drafter_pattern::{compile, Pattern};
//!
//! let issue = compile("/\\bJENKINS-(\\d+)\\b/g").unwrap();
//! let text = "Fixes JENKINS-12 and JENKINS-345";
//!
//! let ids: Vec<_> = issue
//!     .find_matches(text)
//!     .iter()
//!     .filter_map(|m| m.group_str(text, 1))
//!     .collect();
//! assert_eq!(ids, ["12", "345"]);
//!
//! // Literals are escaped and global.
//! let word = compile("a+b").unwrap();
//! assert_eq!(word.find_matches("a+b aab a+b").len(), 2);
//! ```
//!
//! # Flags
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `g` | Replace every match |
//! | `i` | Case-insensitive |
//! | `m` | `^`/`$` match at line boundaries |
//! | `s` | `.` matches newlines |
//! | `x` | Ignore whitespace in the pattern |
//! | `u` | Accepted; Unicode is always on |
//!
//! The regex body uses the syntax of the [`regex`] crate. Classes such as
//! `\d`, `\w` and `\b` are Unicode-aware there, so `\d` also matches
//! digits like `١٢`. Write `[0-9]`, or turn Unicode off for one class with
//! `(?-u:\d)` / `(?-u:\b)`, when only ASCII should match.
//!
//! # Custom matchers
//!
//! Consumers work against the [`Pattern`] trait, so any matcher that can
//! report match and group spans can stand in for [`CompiledPattern`].

mod compiled;
mod error;
mod matcher;
mod spec;

pub use compiled::{compile, CompiledPattern};
pub use error::{PatternError, Result};
pub use matcher::{Match, Pattern};
pub use spec::{Flags, PatternSpec};
