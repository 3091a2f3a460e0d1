//! CLI command handlers
//!
//! Argument definitions (clap) and the handlers that drive the library on
//! behalf of the `budget` binary. Handlers print to stdout and return
//! errors for the binary to report.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{
    handle_categories_command, handle_monthly_command, handle_stats_command, handle_summary_command,
};
pub use transaction::{
    handle_add_command, handle_clear_command, handle_delete_command, handle_list_command,
    handle_show_command, resolve_id, AddArgs, ListArgs,
};
