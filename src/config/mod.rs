//! Configuration module
//!
//! - Path resolution for the ledger, settings and log file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{BudgetPaths, DATA_DIR_ENV};
pub use settings::Settings;
