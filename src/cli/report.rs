//! Report CLI commands

use tracing::debug;

use crate::config::Settings;
use crate::display::format_category_catalog;
use crate::error::BudgetResult;
use crate::models::{CategoryCatalog, TransactionKind};
use crate::reports::BudgetAnalytics;
use crate::storage::Storage;

/// Print the summary report, or the summary payload as JSON
///
/// With `top`, the text report is followed by the largest expense
/// categories only.
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    json: bool,
    top: Option<usize>,
) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let analytics = BudgetAnalytics::new(&transactions);
    debug!(count = transactions.len(), "building summary");

    if json {
        let payload = analytics.summary_payload();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", analytics.summary_report_in(&settings.currency_symbol));

    if let Some(n) = top {
        let top = analytics.top_categories(TransactionKind::Expense, n);
        println!();
        println!("Top {} expense categories:", n);
        if top.is_empty() {
            println!("  (none)");
        }
        for (rank, entry) in top.iter().enumerate() {
            println!(
                "  {}. {:<20} {}",
                rank + 1,
                entry.category,
                entry.total.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Print the quick statistics snapshot
pub fn handle_stats_command(storage: &Storage, settings: &Settings, json: bool) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let analytics = BudgetAnalytics::new(&transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&analytics.stats())?);
    } else {
        print!("{}", analytics.stats_report_in(&settings.currency_symbol));
    }
    Ok(())
}

pub fn handle_monthly_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    let analytics = BudgetAnalytics::new(&transactions);

    print!("{}", analytics.monthly_report_in(&settings.currency_symbol));
    Ok(())
}

/// Print the suggested categories per type
pub fn handle_categories_command(json: bool) -> BudgetResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CategoryCatalog)?);
    } else {
        print!("{}", format_category_catalog());
    }
    Ok(())
}
