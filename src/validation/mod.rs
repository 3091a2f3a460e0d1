//! Input gate for untrusted transaction data
//!
//! Validation is the policy layer: it runs before a [`Transaction`] is built
//! and reports a field-specific reason instead of failing hard. Construction
//! itself only enforces the structural rule that amounts are not negative.
//!
//! [`Transaction`]: crate::models::Transaction

pub mod query;
pub mod sanitize;
pub mod transaction;

use thiserror::Error;

pub use query::{QueryFilter, ValidQuery};
pub use sanitize::sanitize_text;
pub use transaction::{
    TransactionInput, ValidTransaction, DESCRIPTION_MAX_LENGTH, MAX_AMOUNT, MIN_AMOUNT,
};

/// Why a piece of input was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was absent (distinct from a present-but-bad value)
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid type '{0}'. Must be one of: Income, Expense")]
    InvalidType(String),

    #[error("Amount must be a valid number")]
    InvalidAmount(String),

    #[error("Amount must be at least $0.01")]
    AmountTooSmall,

    #[error("Amount cannot exceed $1000000.00")]
    AmountTooLarge,

    #[error("Category must be a non-empty string")]
    EmptyCategory,

    #[error("Description must be a string")]
    DescriptionNotString,

    #[error("Description cannot exceed {max} characters (got {len})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Date must be in format: YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid type filter '{0}'. Must be one of: Income, Expense")]
    InvalidTypeFilter(String),
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField("Transaction type") => "type",
            Self::MissingField("Category") => "category",
            Self::MissingField(_) => "amount",
            Self::InvalidType(_) | Self::InvalidTypeFilter(_) => "type",
            Self::InvalidAmount(_) | Self::AmountTooSmall | Self::AmountTooLarge => "amount",
            Self::EmptyCategory => "category",
            Self::DescriptionNotString | Self::DescriptionTooLong { .. } => "description",
            Self::InvalidDate(_) => "date",
        }
    }
}
