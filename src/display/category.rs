//! Category catalog formatting

use crate::models::{CategoryCatalog, TransactionKind};

/// Format the suggested categories as a tree, one branch per kind
pub fn format_category_catalog() -> String {
    let mut output = String::new();

    for (i, kind) in TransactionKind::all().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", kind));

        let names = CategoryCatalog::suggestions(*kind);
        for (j, name) in names.iter().enumerate() {
            let prefix = if j == names.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!("  {}{}\n", prefix, name));
        }
    }

    output
}
