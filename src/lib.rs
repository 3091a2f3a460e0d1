//! Budget Tracker - personal income and expense ledger
//!
//! This library records income and expense transactions in a flat CSV ledger
//! and derives totals, per-category breakdowns and monthly rollups from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and persisted settings
//! - `error`: Custom error types
//! - `logging`: Explicit logging handle (init/teardown)
//! - `models`: The transaction entity, money and the category catalog
//! - `storage`: CSV ledger storage layer
//! - `reports`: Analytics, summary and monthly reports
//! - `validation`: Input gate for untrusted data
//! - `export`: JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::BudgetPaths;
//! use budget_tracker::reports::BudgetAnalytics;
//! use budget_tracker::storage::Storage;
//!
//! let storage = Storage::new(BudgetPaths::new()?)?;
//! let transactions = storage.transactions.get_all()?;
//! println!("{}", BudgetAnalytics::new(&transactions).summary_report());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

pub use error::{BudgetError, BudgetResult};
