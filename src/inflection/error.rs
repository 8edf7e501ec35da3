//! Inflection error types.

use thiserror::Error;

/// Result type for vocabulary construction.
pub type InflectionResult<T> = Result<T, InflectionError>;

/// Errors raised while building a vocabulary.
///
/// Applying rules never fails; only registering them can.
#[derive(Error, Debug)]
pub enum InflectionError {
    /// A rule pattern is not a valid regular expression.
    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as it was registered.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// An irregular pair was registered with an empty side.
    #[error("irregular pair must have non-empty forms (singular: '{singular}', plural: '{plural}')")]
    EmptyIrregular {
        /// Singular form as given.
        singular: String,
        /// Plural form as given.
        plural: String,
    },
}

impl InflectionError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Get the offending pattern, if this error is about one.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { pattern, .. } => Some(pattern),
            Self::EmptyIrregular { .. } => None,
        }
    }
}
