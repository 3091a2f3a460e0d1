//! Transaction register formatting

use crate::models::{Money, Transaction};

const REGISTER_WIDTH: usize = 78;

/// Signed amount as shown in the register: `+$100.00` or `-$50.00`
fn signed_amount(txn: &Transaction, symbol: &str) -> String {
    format!("{}{}", txn.kind().sign(), txn.amount().format_with_symbol(symbol))
}

/// Format a single transaction as one register row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:8} {} {:8} {:15} {:>12}  {}",
        txn.id().short(),
        txn.date().format("%Y-%m-%d"),
        txn.kind(),
        truncate(txn.category(), 15),
        signed_amount(txn, "$"),
        truncate(txn.description(), 24).trim_end()
    )
}

/// Format a list of transactions as a register, with the net total at the end
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:8} {:15} {:>12}  {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    let mut net = Money::zero();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
        if txn.is_income() {
            net += txn.amount();
        } else {
            net -= txn.amount();
        }
    }

    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), net {}\n",
        transactions.len(),
        net
    ));

    output
}

/// Format every field of one transaction
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!("Date:        {}\n", txn.date().format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!("Category:    {}\n", txn.category()));
    output.push_str(&format!("Amount:      {}\n", txn.amount()));
    if !txn.description().is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description()));
    }

    output
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    // newlines would break the row layout
    let flat: String = s.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    if flat.chars().count() <= max_len {
        format!("{:width$}", flat, width = max_len)
    } else {
        let head: String = flat.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
