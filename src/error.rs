//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Policy rejections from the input gate live in [`ValidationError`] and are
//! wrapped here only when a caller chooses to propagate them.

use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV encoding/decoding errors outside of a specific ledger row
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors (ledger file could not be opened, written or renamed)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row (or the header) of the ledger file could not be decoded
    #[error("Corrupt ledger record at line {line}: {reason}")]
    CorruptRecord { line: u64, reason: String },

    /// Structural rejection: transactions never carry a negative amount
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),

    /// Policy rejection raised by the input gate
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// No transaction carries the requested id
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// An id prefix matched more than one transaction
    #[error("Id prefix '{prefix}' matches {count} transactions")]
    AmbiguousId { prefix: String, count: usize },
}

impl BudgetError {
    /// Create a corrupt-record error for a given ledger line
    pub fn corrupt(line: u64, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a policy (validation) rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error came from a malformed stored row
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
