//! Transaction kind (income vs. expense)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// All kinds, in catalog order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// The exact label used on the wire and in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign used when listing amounts
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parsing is exact and case-sensitive
impl FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transaction type '{0}'")]
pub struct UnknownKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        assert_eq!("Income".parse(), Ok(TransactionKind::Income));
        assert_eq!("Expense".parse(), Ok(TransactionKind::Expense));
        assert!("income".parse::<TransactionKind>().is_err());
        assert!("Gift".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for kind in TransactionKind::all() {
            assert_eq!(kind.to_string().parse::<TransactionKind>(), Ok(*kind));
        }
    }
}
