//! Drafter Template - placeholder substitution for release notes.
//!
//! Turns a template such as
//!
//! ```text
//! # v$NEXT_PATCH_VERSION
//! ## Changes
//! $CHANGES
//! ```
//!
//! into finished text, in two passes:
//!
//! **Pass 1 - placeholders**: every key of a [`Context`] found in the input is
//! replaced by its value. Keys are plain literal tokens (conventionally
//! `$NAME`, but any string works). Values are text, numbers, or
//! [`NestedTemplate`]s that are themselves resolved against their own fields
//! first.
//!
//! **Pass 2 - rules**: an ordered list of [`Replacer`]s rewrites the result.
//! Each rule runs over the output of the previous one, so rules can cascade.
//!
//! # Quick Start
//!
//! ```rust
//! use drafter_template::{resolve, Context, NestedTemplate, Replacer};
//!
//! let version = NestedTemplate::new(
//!     "$MAJOR.$MINOR.$PATCH",
//!     Context::new().with("$MAJOR", 1).with("$MINOR", 1).with("$PATCH", 0),
//! );
//! let context = Context::new()
//!     .with("$NEXT_MINOR_VERSION", version)
//!     .with("$CHANGES", "* Support JENKINS-1234");
//!
//! let rules = [Replacer::compile(
//!     "/\\bJENKINS-(\\d+)\\b/g",
//!     "[JENKINS-$1](https://issues.jenkins.io/browse/JENKINS-$1)",
//! )
//! .unwrap()];
//!
//! let notes = resolve("# v$NEXT_MINOR_VERSION\n$CHANGES", &context, &rules);
//! assert_eq!(
//!     notes,
//!     "# v1.1.0\n* Support [JENKINS-1234](https://issues.jenkins.io/browse/JENKINS-1234)",
//! );
//! ```
//!
//! # Substitution Rules
//!
//! - Placeholders missing from the context are left untouched, so templates
//!   can be filled in stages.
//! - Keys missing from the input are ignored.
//! - When keys overlap (`$A` and `$AB`), the longest key that matches at a
//!   position wins.
//! - Inserted values are never scanned again; only [`NestedTemplate`]s
//!   expand recursively.
//!
//! # Rule Patterns
//!
//! Rule patterns come from [`drafter_pattern`]: a `/regex/flags` string or a
//! literal. Literals and `g`-flagged regexes replace every match; other
//! regexes replace only the first. Any type implementing [`Pattern`] can be
//! used in place of [`CompiledPattern`].
//!
//! # Logging
//!
//! Resolution emits `tracing` events at `debug` and `trace` level. No
//! subscriber is installed by this crate.

mod context;
mod error;
mod replace;
mod resolve;
mod substitute;
mod value;

pub use context::Context;
pub use error::{ContextError, Result};
pub use replace::{apply_rules, Replacer};
pub use resolve::{render, resolve, Template};
pub use value::{ContextValue, NestedTemplate, Number, TEMPLATE_KEY};

// Re-export the pattern compiler so callers need one dependency.
pub use drafter_pattern::{compile, CompiledPattern, Match, Pattern, PatternError};
