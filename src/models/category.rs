//! Suggested categories
//!
//! The catalog is a fixed mapping from kind to an ordered list of names. It
//! only feeds pickers and listings; storage accepts any non-empty category.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::kind::TransactionKind;

const INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Investment", "Other Income"];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Bills",
    "Shopping",
    "Health",
    "Other Expense",
];

/// The static category catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCatalog;

impl CategoryCatalog {
    /// Suggested categories for a kind, in display order
    pub fn suggestions(kind: TransactionKind) -> &'static [&'static str] {
        match kind {
            TransactionKind::Income => INCOME_CATEGORIES,
            TransactionKind::Expense => EXPENSE_CATEGORIES,
        }
    }
}

/// Serializes as `{"Income": [...], "Expense": [...]}`
impl Serialize for CategoryCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kinds = TransactionKind::all();
        let mut map = serializer.serialize_map(Some(kinds.len()))?;
        for kind in kinds {
            map.serialize_entry(kind.as_str(), Self::suggestions(*kind))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_order() {
        let income = CategoryCatalog::suggestions(TransactionKind::Income);
        assert_eq!(income, &["Salary", "Bonus", "Investment", "Other Income"]);

        let expense = CategoryCatalog::suggestions(TransactionKind::Expense);
        assert_eq!(expense.len(), 7);
        assert_eq!(expense[0], "Food");
        assert_eq!(expense[6], "Other Expense");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&CategoryCatalog).unwrap();
        assert_eq!(
            json,
            r#"{"Income":["Salary","Bonus","Investment","Other Income"],"Expense":["Food","Transport","Entertainment","Bills","Shopping","Health","Other Expense"]}"#
        );
    }
}
