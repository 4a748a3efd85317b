//! Error types for record decoding and the expense ledger.
//!
//! Validation itself never fails on data; see [`quality_core::RuleError`] for
//! the configuration errors the engine can return.

use thiserror::Error;

/// Errors raised while decoding records from a record source.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The record source has the wrong overall shape
    #[error("Invalid record source: {0}")]
    RecordSource(String),

    /// A record is not a mapping
    #[error("Record {index} is not an object (found {found})")]
    NotAnObject { index: usize, found: String },

    /// JSON decoding failed
    #[error("Failed to decode records: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidationError {
    /// Creates a new record source error.
    pub fn record_source(message: impl Into<String>) -> Self {
        Self::RecordSource(message.into())
    }
}

/// Errors raised by [`crate::ExpenseLedger`] operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// Category is empty after trimming
    #[error("Please enter a category")]
    EmptyCategory,

    /// Amount is not a finite positive number
    #[error("Please enter a valid amount (got {0})")]
    InvalidAmount(f64),

    /// No expense at the given position
    #[error("No expense at position {index} (ledger has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A summary was requested for an empty ledger
    #[error("Please add at least one expense to calculate results")]
    EmptyLedger,
}
