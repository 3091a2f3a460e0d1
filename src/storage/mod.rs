//! Storage layer
//!
//! The whole durable state is one CSV ledger file. All access to it is
//! centralized in [`TransactionStore`]; nothing else opens that file.

pub mod file_io;
pub mod transactions;

pub use transactions::TransactionStore;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Storage coordinator handing out the ledger store
#[derive(Debug)]
pub struct Storage {
    paths: BudgetPaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Open storage under `paths`, creating directories and the ledger header
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let transactions = TransactionStore::new(paths.transactions_file());
        transactions.ensure_initialized()?;

        Ok(Self {
            transactions,
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }
}
