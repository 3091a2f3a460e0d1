//! Quick statistics snapshot

use serde::Serialize;

use super::analytics::BudgetAnalytics;
use super::summary::{amount_cell, banner, REPORT_WIDTH};
use crate::models::Money;

/// Headline figures for a quick overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPayload {
    pub total_transactions: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Mean expense, rounded to the cent; zero when there are no expenses
    pub average_expense: Money,
    /// Number of distinct expense categories
    pub categories_count: usize,
}

impl<'a> BudgetAnalytics<'a> {
    pub fn expense_count(&self) -> usize {
        self.transactions().iter().filter(|t| t.is_expense()).count()
    }

    /// Total expense divided by the number of expenses
    pub fn average_expense(&self) -> Money {
        let count = self.expense_count().max(1);
        let mean = self.total_expense().cents() as f64 / count as f64;
        Money::from_cents(mean.round() as i64)
    }

    pub fn stats(&self) -> StatsPayload {
        StatsPayload {
            total_transactions: self.transaction_count(),
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            balance: self.balance(),
            average_expense: self.average_expense(),
            categories_count: self.expenses_by_category().len(),
        }
    }

    pub fn stats_report_in(&self, symbol: &str) -> String {
        let stats = self.stats();

        let mut out = String::new();
        banner(&mut out, "QUICK STATS");
        out.push_str(&format!("Transactions:       {:>11}\n", stats.total_transactions));
        out.push_str(&format!("Total Income:       {}\n", amount_cell(symbol, stats.total_income)));
        out.push_str(&format!("Total Expenses:     {}\n", amount_cell(symbol, stats.total_expense)));
        out.push_str(&format!("Balance:            {}\n", amount_cell(symbol, stats.balance)));
        out.push_str(&format!("Average Expense:    {}\n", amount_cell(symbol, stats.average_expense)));
        out.push_str(&format!("Expense Categories: {:>11}\n", stats.categories_count));
        out.push('\n');
        out.push_str(&"=".repeat(REPORT_WIDTH));
        out.push('\n');
        out
    }
}
