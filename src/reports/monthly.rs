//! Month-by-month text report

use super::analytics::BudgetAnalytics;
use super::summary::{amount_cell, banner};

impl<'a> BudgetAnalytics<'a> {
    /// Income, expenses and balance per month, oldest first, using `$`
    pub fn monthly_report(&self) -> String {
        self.monthly_report_in("$")
    }

    pub fn monthly_report_in(&self, symbol: &str) -> String {
        let mut out = String::new();
        banner(&mut out, "MONTHLY BREAKDOWN");

        let months = self.monthly_summary();
        if months.is_empty() {
            out.push_str("No transactions recorded.\n\n");
        }
        for (month, totals) in &months {
            out.push_str(&format!("{}:\n", month));
            out.push_str(&format!("  Income:   {}\n", amount_cell(symbol, totals.income)));
            out.push_str(&format!("  Expenses: {}\n", amount_cell(symbol, totals.expense)));
            out.push_str(&format!("  Balance:  {}\n", amount_cell(symbol, totals.balance())));
            out.push('\n');
        }

        out.push_str(&"=".repeat(50));
        out.push('\n');
        out
    }
}
