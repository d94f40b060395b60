//! Error types for the pattern crate.

use thiserror::Error;

/// Errors that can occur when compiling a pattern specification.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The body of a `/pattern/flags` specification is not a valid regex.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A flag letter that has no equivalent in the regex engine.
    #[error("unsupported flag '{flag}' in pattern {spec}")]
    UnsupportedFlag { flag: char, spec: String },

    /// The same flag letter given twice.
    #[error("duplicate flag '{flag}' in pattern {spec}")]
    DuplicateFlag { flag: char, spec: String },
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
