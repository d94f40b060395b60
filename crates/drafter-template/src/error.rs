//! Error types for building contexts.

use thiserror::Error;

/// Errors raised while turning loose data into a [`Context`](crate::Context).
///
/// Resolution itself never fails; these only come from the conversions that
/// build nested templates and from deserialization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// A nested map has no `template` entry.
    #[error("nested context has no `template` entry")]
    MissingTemplate,

    /// The `template` entry of a nested map is not a string.
    #[error("`template` entry must be a string, found {kind}")]
    TemplateNotText { kind: &'static str },
}

/// Result type for context conversions.
pub type Result<T> = std::result::Result<T, ContextError>;
