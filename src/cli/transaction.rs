//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Args;
use tracing::{debug, info};

use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Transaction, TransactionId, DATE_FORMAT};
use crate::storage::Storage;
use crate::validation::{QueryFilter, TransactionInput, ValidationError};

/// Arguments for `budget add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: Income or Expense
    pub kind: String,
    /// Category name (any non-empty name; see `budget categories` for suggestions)
    pub category: String,
    /// Amount, e.g. "50" or "12.99"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `budget list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show this type (Income or Expense)
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Only show this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only show this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Show at most this many of the most recent entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Validate, build and append one transaction
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> BudgetResult<Transaction> {
    let mut input = TransactionInput::new(args.kind, args.category, args.amount);
    if let Some(description) = args.description {
        input = input.with_description(description);
    }
    if let Some(date) = args.date {
        input = input.with_date(date);
    }
    let input = input.sanitized();

    let txn = input.validate()?.into_transaction()?;
    storage.transactions.add(&txn)?;

    println!("Added transaction {}", txn.id());
    println!("  {}", txn);
    Ok(txn)
}

/// Print the register, optionally filtered
pub fn handle_list_command(storage: &Storage, args: ListArgs) -> BudgetResult<()> {
    let query = QueryFilter {
        kind: args.kind,
        category: args.category,
    }
    .validate()?;

    let snapshot = match args.date.as_deref().map(str::trim) {
        None | Some("") => storage.transactions.get_all()?,
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?;
            storage.transactions.get_by_date(date)?
        }
    };

    let mut transactions = query.apply(snapshot);
    if let Some(limit) = args.limit {
        let skip = transactions.len().saturating_sub(limit);
        transactions.drain(..skip);
    }
    debug!(shown = transactions.len(), "listing transactions");

    print!("{}", format_transaction_register(&transactions));
    Ok(())
}

/// Turn a full id or an unambiguous id prefix into a stored id
pub fn resolve_id(storage: &Storage, raw: &str) -> BudgetResult<TransactionId> {
    let raw = raw.trim();
    let transactions = storage.transactions.get_all()?;

    if transactions.iter().any(|t| t.id() == raw) {
        return Ok(TransactionId::from(raw));
    }

    let mut candidates: Vec<&TransactionId> = transactions
        .iter()
        .map(Transaction::id)
        .filter(|id| !raw.is_empty() && id.as_str().starts_with(raw))
        .collect();
    candidates.sort();
    candidates.dedup();

    match candidates.as_slice() {
        [] => Err(BudgetError::NotFound(raw.to_string())),
        [id] => Ok((*id).clone()),
        _ => Err(BudgetError::AmbiguousId {
            prefix: raw.to_string(),
            count: candidates.len(),
        }),
    }
}

/// Print every field of one transaction
pub fn handle_show_command(storage: &Storage, raw_id: &str) -> BudgetResult<()> {
    let id = resolve_id(storage, raw_id)?;
    let txn = storage
        .transactions
        .get_all()?
        .into_iter()
        .find(|t| *t.id() == id)
        .ok_or_else(|| BudgetError::NotFound(id.to_string()))?;

    print!("{}", format_transaction_details(&txn));
    Ok(())
}

pub fn handle_delete_command(storage: &Storage, raw_id: &str) -> BudgetResult<()> {
    let id = resolve_id(storage, raw_id)?;
    if !storage.transactions.delete(&id)? {
        return Err(BudgetError::NotFound(id.to_string()));
    }

    println!("Deleted transaction {}", id);
    Ok(())
}

pub fn handle_clear_command(storage: &Storage, confirmed: bool) -> BudgetResult<()> {
    if !confirmed {
        println!("This removes every transaction. Re-run with --yes to confirm.");
        return Ok(());
    }

    let removed = storage.transactions.count()?;
    storage.transactions.clear()?;
    info!(removed, "ledger cleared from the command line");

    println!("Removed {} transaction(s).", removed);
    Ok(())
}
