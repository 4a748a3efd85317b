//! Error types for rule definitions.
//!
//! Malformed data is never an error: it is reported as defects inside a
//! report. The errors here describe rule sets that can not be evaluated at
//! all, and they reject a validation call before any record is read.

use thiserror::Error;

/// Result type for rule set operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Configuration error raised for an invalid rule definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Rule set name is empty
    #[error("Rule set name cannot be empty")]
    EmptyName,

    /// A field path is empty
    #[error("Field path cannot be empty")]
    EmptyFieldPath,

    /// A field path has empty segments
    #[error("Invalid field path '{0}': segments cannot be empty")]
    InvalidFieldPath(String),

    /// Range minimum is greater than its maximum
    #[error("Invalid range for field '{field}': min {min} is greater than max {max}")]
    InvalidRange {
        /// Field the range applies to
        field: String,
        /// Declared minimum
        min: f64,
        /// Declared maximum
        max: f64,
    },

    /// Range bound is NaN or infinite
    #[error("Invalid range for field '{field}': bounds must be finite numbers")]
    NonFiniteBound {
        /// Field the range applies to
        field: String,
    },
}

impl RuleError {
    /// Creates a new inverted range error.
    pub fn invalid_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::InvalidRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates a new non-finite bound error.
    pub fn non_finite_bound(field: impl Into<String>) -> Self {
        Self::NonFiniteBound {
            field: field.into(),
        }
    }
}
