//! Errors raised while turning definition names into pattern matchers

use thiserror::Error;

/// Errors that can occur when creating a pattern matcher
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid regular expression
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No registered prefix matches the pattern
    #[error("no pattern syntax registered for '{pattern}'")]
    UnknownPrefix { pattern: String },
}

impl PatternError {
    /// Create an invalid regex error
    pub fn invalid_regex(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            source,
        }
    }
}
