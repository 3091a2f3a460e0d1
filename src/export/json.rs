//! JSON export
//!
//! The document carries a schema version and timestamp next to the
//! transactions, so a consumer can tell which layout it is reading.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;
use crate::reports::{BudgetAnalytics, SummaryPayload};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the ledger plus its aggregate figures
#[derive(Debug, Clone, Serialize)]
pub struct TransactionExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transaction_count: usize,
    /// Transactions in ledger (insertion) order
    pub transactions: Vec<Transaction>,
    pub summary: SummaryPayload,
}

impl TransactionExport {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let summary = BudgetAnalytics::new(&transactions).summary_payload();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            transactions,
            summary,
        }
    }

    /// Take one consistent snapshot from storage
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self::from_transactions(storage.transactions.get_all()?))
    }
}

/// Write the ledger as JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let export = TransactionExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
