//! Transaction store backed by the CSV ledger
//!
//! The ledger file is the canonical transaction set. Every read re-parses the
//! file and hands back an owned snapshot; there is no in-memory cache or index.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Transaction, TransactionId, TransactionKind, LEDGER_HEADER};

use super::file_io::{append_csv_record, create_with_header, read_csv_records, write_csv_atomic};

/// Append-only ledger with explicit compaction on delete/clear
///
/// All file access is serialized through one mutex, so an `add` can never be
/// lost in the middle of a `delete` rewrite even when the store is shared
/// between threads.
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TransactionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> BudgetResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire ledger lock: {}", e)))
    }

    /// Create the ledger with its header if it does not exist yet
    pub fn ensure_initialized(&self) -> BudgetResult<()> {
        let _guard = self.guard()?;
        if create_with_header(&self.path, &LEDGER_HEADER)? {
            info!(path = %self.path.display(), "created ledger file");
        }
        Ok(())
    }

    /// Append one transaction
    ///
    /// Existing rows are never rewritten. Ids are not checked for uniqueness;
    /// supplying a fresh id is the caller's job.
    pub fn add(&self, txn: &Transaction) -> BudgetResult<()> {
        let _guard = self.guard()?;
        append_csv_record(&self.path, &LEDGER_HEADER, &txn.to_record())?;
        info!(id = %txn.id(), kind = %txn.kind(), amount = %txn.amount(), "added transaction");
        Ok(())
    }

    /// All transactions in insertion order
    ///
    /// A missing ledger reads as empty. A malformed row aborts the read with
    /// [`BudgetError::CorruptRecord`].
    pub fn get_all(&self) -> BudgetResult<Vec<Transaction>> {
        let _guard = self.guard()?;
        self.read_unlocked()
    }

    fn read_unlocked(&self) -> BudgetResult<Vec<Transaction>> {
        let Some(rows) = read_csv_records(&self.path, &LEDGER_HEADER)? else {
            debug!(path = %self.path.display(), "ledger file absent, reading as empty");
            return Ok(Vec::new());
        };

        let transactions = rows
            .into_iter()
            .map(|(line, record)| {
                Transaction::from_record(&record).map_err(|reason| BudgetError::corrupt(line, reason))
            })
            .collect::<BudgetResult<Vec<_>>>()?;

        debug!(count = transactions.len(), "loaded ledger");
        Ok(transactions)
    }

    pub fn get_by_type(&self, kind: TransactionKind) -> BudgetResult<Vec<Transaction>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.kind() == kind)
            .collect())
    }

    pub fn get_by_category(&self, category: &str) -> BudgetResult<Vec<Transaction>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.category() == category)
            .collect())
    }

    pub fn get_by_date(&self, date: NaiveDate) -> BudgetResult<Vec<Transaction>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.date() == date)
            .collect())
    }

    pub fn count(&self) -> BudgetResult<usize> {
        Ok(self.get_all()?.len())
    }

    /// Remove the transaction with `id`
    ///
    /// Rewrites the ledger without that row. Returns `false` (and leaves the
    /// file untouched) when no row matches. If duplicate ids were stored, only
    /// the first match is removed.
    pub fn delete(&self, id: &TransactionId) -> BudgetResult<bool> {
        let _guard = self.guard()?;
        let mut transactions = self.read_unlocked()?;

        let Some(index) = transactions.iter().position(|t| t.id() == id) else {
            debug!(%id, "delete requested for unknown id");
            return Ok(false);
        };
        transactions.remove(index);

        write_csv_atomic(
            &self.path,
            &LEDGER_HEADER,
            transactions.iter().map(Transaction::to_record),
        )?;
        info!(%id, remaining = transactions.len(), "deleted transaction");
        Ok(true)
    }

    /// Truncate the ledger to its header
    pub fn clear(&self) -> BudgetResult<()> {
        let _guard = self.guard()?;
        write_csv_atomic(&self.path, &LEDGER_HEADER, std::iter::empty())?;
        info!(path = %self.path.display(), "cleared ledger");
        Ok(())
    }
}
