//! Display formatting for terminal output
//!
//! Plain-text tables for the register and the category catalog. Report
//! text lives with the reports themselves.

pub mod category;
pub mod transaction;

pub use category::format_category_catalog;
pub use transaction::{format_transaction_details, format_transaction_register, format_transaction_row};
