//! Summary payload and summary text report

use std::collections::BTreeMap;
use serde::Serialize;

use super::analytics::{percentage, BudgetAnalytics, CategoryBreakdown, MonthlyTotals};
use crate::models::Money;

pub(crate) const REPORT_WIDTH: usize = 50;

/// Aggregate figures handed to outer layers as one structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPayload {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub expenses_by_category: CategoryBreakdown,
    pub income_by_category: CategoryBreakdown,
    pub monthly_summary: BTreeMap<String, MonthlyTotals>,
    pub transaction_count: usize,
}

impl<'a> BudgetAnalytics<'a> {
    pub fn summary_payload(&self) -> SummaryPayload {
        SummaryPayload {
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            balance: self.balance(),
            expenses_by_category: self.expenses_by_category(),
            income_by_category: self.income_by_category(),
            monthly_summary: self.monthly_summary(),
            transaction_count: self.transaction_count(),
        }
    }

    /// Totals plus per-category breakdowns, using `$`
    pub fn summary_report(&self) -> String {
        self.summary_report_in("$")
    }

    pub fn summary_report_in(&self, symbol: &str) -> String {
        let total_income = self.total_income();
        let total_expense = self.total_expense();

        let mut out = String::new();
        banner(&mut out, "BUDGET SUMMARY REPORT");
        out.push_str(&format!("Total Income:       {}\n", amount_cell(symbol, total_income)));
        out.push_str(&format!("Total Expenses:     {}\n", amount_cell(symbol, total_expense)));
        out.push_str(&format!("Balance:            {}\n", amount_cell(symbol, self.balance())));

        section(&mut out, "EXPENSES BY CATEGORY");
        breakdown_rows(
            &mut out,
            symbol,
            &self.expenses_by_category(),
            total_expense,
            "No expenses recorded.",
        );

        section(&mut out, "INCOME BY CATEGORY");
        breakdown_rows(
            &mut out,
            symbol,
            &self.income_by_category(),
            total_income,
            "No income recorded.",
        );

        out.push('\n');
        out.push_str(&"=".repeat(REPORT_WIDTH));
        out.push('\n');
        out
    }
}

/// `$    123.45`: symbol followed by a right-aligned 10-wide amount
pub(crate) fn amount_cell(symbol: &str, amount: Money) -> String {
    format!("{}{:>10}", symbol, amount.to_decimal_string())
}

pub(crate) fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(REPORT_WIDTH);
    out.push_str(&format!("\n{}\n{}\n{}\n\n", rule, title, rule));
}

fn section(out: &mut String, title: &str) {
    let rule = "-".repeat(REPORT_WIDTH);
    out.push_str(&format!("\n{}\n{}\n{}\n", rule, title, rule));
}

fn breakdown_rows(
    out: &mut String,
    symbol: &str,
    breakdown: &CategoryBreakdown,
    whole: Money,
    empty_note: &str,
) {
    if breakdown.is_empty() {
        out.push_str(empty_note);
        out.push('\n');
        return;
    }
    for entry in breakdown {
        out.push_str(&format!(
            "{:<25} {} ({:>5.1}%)\n",
            entry.category,
            amount_cell(symbol, entry.total),
            percentage(entry.total, whole)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn december() -> Vec<Transaction> {
        let day = |d| NaiveDate::from_ymd_opt(2024, 12, d).unwrap();
        vec![
            Transaction::new(Money::from_cents(10000), TransactionKind::Income, "Salary")
                .unwrap()
                .with_date(day(1)),
            Transaction::new(Money::from_cents(5000), TransactionKind::Expense, "Food")
                .unwrap()
                .with_date(day(5)),
            Transaction::new(Money::from_cents(3000), TransactionKind::Expense, "Transport")
                .unwrap()
                .with_date(day(10)),
        ]
    }

    #[test]
    fn test_payload_shape() {
        let data = december();
        let payload = BudgetAnalytics::new(&data).summary_payload();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["total_income"], 100.0);
        assert_eq!(value["total_expense"], 80.0);
        assert_eq!(value["balance"], 20.0);
        assert_eq!(value["expenses_by_category"]["Food"], 50.0);
        assert_eq!(value["income_by_category"]["Salary"], 100.0);
        assert_eq!(value["monthly_summary"]["2024-12"]["income"], 100.0);
        assert_eq!(value["monthly_summary"]["2024-12"]["expense"], 80.0);
        assert_eq!(value["transaction_count"], 3);
    }

    #[test]
    fn test_summary_report_lines() {
        let data = december();
        let report = BudgetAnalytics::new(&data).summary_report();

        assert!(report.contains("BUDGET SUMMARY REPORT"));
        assert!(report.contains("Total Income:       $    100.00\n"));
        assert!(report.contains("Total Expenses:     $     80.00\n"));
        assert!(report.contains("Balance:            $     20.00\n"));
        assert!(report.contains(&format!("{:<25} $     50.00 ( 62.5%)\n", "Food")));
        assert!(report.contains(&format!("{:<25} $     30.00 ( 37.5%)\n", "Transport")));
        assert!(report.contains(&format!("{:<25} $    100.00 (100.0%)\n", "Salary")));
        assert!(report.find("Food").unwrap() < report.find("Transport").unwrap());
    }

    #[test]
    fn test_summary_report_empty() {
        let report = BudgetAnalytics::new(&[]).summary_report();
        assert!(report.contains("Total Income:       $      0.00\n"));
        assert!(report.contains("No expenses recorded."));
        assert!(report.contains("No income recorded."));
        assert!(!report.contains("NaN"));
    }

    #[test]
    fn test_custom_symbol() {
        let data = december();
        let report = BudgetAnalytics::new(&data).summary_report_in("€");
        assert!(report.contains("Total Income:       €    100.00\n"));
    }
}
