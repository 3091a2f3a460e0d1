//! Aggregations over a transaction snapshot
//!
//! [`BudgetAnalytics`] borrows a slice and recomputes every figure on each
//! call. It holds no state of its own, so it never goes stale.

use std::collections::{BTreeMap, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Serialize as DeriveSerialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Summed amount for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Per-category totals, largest first
///
/// Ties keep the order in which each category first appeared. Serializes as
/// a JSON object whose keys follow that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown(Vec<CategoryTotal>);

impl CategoryBreakdown {
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Category names in breakdown order
    pub fn categories(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.category.as_str()).collect()
    }

    pub fn total(&self) -> Money {
        self.0.iter().map(|c| c.total).sum()
    }

    /// Keep only the first `n` entries
    pub fn top(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }
}

impl<'a> IntoIterator for &'a CategoryBreakdown {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.total)?;
        }
        map.end()
    }
}

/// Income and expense for one `YYYY-MM` bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DeriveSerialize)]
pub struct MonthlyTotals {
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Read-only query surface over a snapshot of transactions
#[derive(Debug, Clone, Copy)]
pub struct BudgetAnalytics<'a> {
    transactions: &'a [Transaction],
}

impl<'a> BudgetAnalytics<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    fn total_for(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }

    pub fn total_income(&self) -> Money {
        self.total_for(TransactionKind::Income)
    }

    pub fn total_expense(&self) -> Money {
        self.total_for(TransactionKind::Expense)
    }

    /// Income minus expense; negative when overspent
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    /// Category totals for one kind, sorted descending by amount
    pub fn by_category(&self, kind: TransactionKind) -> CategoryBreakdown {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for txn in self.transactions.iter().filter(|t| t.kind() == kind) {
            match slots.get(txn.category()) {
                Some(&slot) => totals[slot].total += txn.amount(),
                None => {
                    slots.insert(txn.category(), totals.len());
                    totals.push(CategoryTotal {
                        category: txn.category().to_string(),
                        total: txn.amount(),
                    });
                }
            }
        }

        // stable: ties stay in first-seen order
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        CategoryBreakdown(totals)
    }

    pub fn expenses_by_category(&self) -> CategoryBreakdown {
        self.by_category(TransactionKind::Expense)
    }

    pub fn income_by_category(&self) -> CategoryBreakdown {
        self.by_category(TransactionKind::Income)
    }

    /// The `n` largest categories of one kind
    pub fn top_categories(&self, kind: TransactionKind, n: usize) -> CategoryBreakdown {
        self.by_category(kind).top(n)
    }

    /// Income/expense per `YYYY-MM`, ascending by month
    pub fn monthly_summary(&self) -> BTreeMap<String, MonthlyTotals> {
        let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
        for txn in self.transactions {
            let bucket = months.entry(txn.month_key()).or_default();
            match txn.kind() {
                TransactionKind::Income => bucket.income += txn.amount(),
                TransactionKind::Expense => bucket.expense += txn.amount(),
            }
        }
        months
    }
}

/// Share of `part` in `whole` as a percentage; zero when `whole` is zero
pub fn percentage(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}
