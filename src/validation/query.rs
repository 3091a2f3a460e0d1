//! Validation of listing filters

use serde::Deserialize;

use super::ValidationError;
use crate::models::{Transaction, TransactionKind};

/// Optional filters for listing transactions; blank or whitespace-only values mean "no filter"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryFilter {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A checked filter ready to apply to a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidQuery {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
}

impl QueryFilter {
    pub fn validate(&self) -> Result<ValidQuery, ValidationError> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<TransactionKind>()
                    .map_err(|_| ValidationError::InvalidTypeFilter(raw.to_string()))?,
            ),
        };

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(ValidQuery { kind, category })
    }
}

impl ValidQuery {
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind() == k)
            && self.category.as_deref().map_or(true, |c| txn.category() == c)
    }

    /// Keep only the matching transactions, preserving order
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        transactions.into_iter().filter(|t| self.matches(t)).collect()
    }
}
