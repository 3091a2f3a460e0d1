//! YAML export

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::TransactionExport;
use crate::storage::Storage;

/// Write the ledger as YAML, preceded by a short comment header
pub fn export_yaml<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    let export = TransactionExport::from_storage(storage)?;

    let header = format!(
        "# Budget Tracker Export\n# Generated: {}\n# Transactions: {}\n\n",
        export.exported_at.to_rfc3339(),
        export.transaction_count
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .transactions
            .add(
                &Transaction::new(Money::from_cents(3000), TransactionKind::Expense, "Transport")
                    .unwrap()
                    .with_description("Bus pass"),
            )
            .unwrap();

        let mut output = Vec::new();
        export_yaml(&storage, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Budget Tracker Export"));
        assert!(text.contains("# Transactions: 1"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let doc: serde_yaml::Value = serde_yaml::from_str(&body).unwrap();
        assert_eq!(doc["transaction_count"].as_u64(), Some(1));
        assert_eq!(doc["transactions"][0]["category"].as_str(), Some("Transport"));
        assert_eq!(doc["summary"]["total_expense"].as_f64(), Some(30.0));
    }
}
