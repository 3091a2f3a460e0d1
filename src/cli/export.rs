//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_json, export_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON document (machine-readable)
    Json,
    /// YAML document (human-readable)
    Yaml,
}

/// Arguments for `budget export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

fn write_export<W: Write>(storage: &Storage, args: &ExportArgs, writer: &mut W) -> BudgetResult<()> {
    match args.format {
        ExportFormat::Json => export_json(storage, writer, !args.compact),
        ExportFormat::Yaml => export_yaml(storage, writer),
    }
}

pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> BudgetResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;

            info!(path = %path.display(), format = ?args.format, "exported ledger");
            println!("Exported ledger to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, &args, &mut handle)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .transactions
            .add(&Transaction::new(Money::from_cents(700), TransactionKind::Expense, "Food").unwrap())
            .unwrap();

        let output = temp_dir.path().join("out.json");
        handle_export_command(
            &storage,
            ExportArgs {
                format: ExportFormat::Json,
                output: Some(output.clone()),
                compact: true,
            },
        )
        .unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc["transaction_count"], 1);
        assert_eq!(doc["transactions"][0]["amount"], 7.0);
    }
}
