//! Reports and analytics
//!
//! Everything here is a pure function of a transaction snapshot taken from
//! the store. Nothing is cached between calls.

pub mod analytics;
pub mod monthly;
pub mod stats;
pub mod summary;

pub use analytics::{percentage, BudgetAnalytics, CategoryBreakdown, CategoryTotal, MonthlyTotals};
pub use stats::StatsPayload;
pub use summary::SummaryPayload;
