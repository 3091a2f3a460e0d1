//! Core data models
//!
//! The transaction record, its amount and id types, and the fixed category
//! catalog offered to callers.

pub mod category;
pub mod ids;
pub mod kind;
pub mod money;
pub mod transaction;

pub use category::CategoryCatalog;
pub use ids::TransactionId;
pub use kind::{TransactionKind, UnknownKind};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, DATE_FORMAT, LEDGER_HEADER};
