//! Export of the ledger in machine-readable formats
//!
//! - JSON: full snapshot plus summary, for other programs
//! - YAML: same document with a comment header, for people

pub mod json;
pub mod yaml;

pub use json::{export_json, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
