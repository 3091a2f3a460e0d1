//! CSV file primitives for the ledger
//!
//! Appends go straight to the end of the file. Full rewrites go through a temp
//! file and a rename so a crash never leaves a half-written ledger behind.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::BudgetError;

/// A decoded data row together with its 1-based line number in the file
pub type NumberedRecord = (u64, StringRecord);

fn ensure_parent(path: &Path) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Create `path` containing only `header`, unless it already exists
///
/// Returns `true` when the file was created.
pub fn create_with_header(path: &Path, header: &[&str]) -> Result<bool, BudgetError> {
    if path.exists() {
        return Ok(false);
    }
    write_csv_atomic(path, header, std::iter::empty::<StringRecord>())?;
    Ok(true)
}

/// Read every data row of a CSV file, checking the header first
///
/// Returns `Ok(None)` when the file does not exist. Blank lines are skipped.
/// A header that does not match `header` is reported as a corrupt line 1.
pub fn read_csv_records(
    path: &Path,
    header: &[&str],
) -> Result<Option<Vec<NumberedRecord>>, BudgetError> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let found = reader
        .headers()
        .map_err(|e| BudgetError::corrupt(1, format!("unreadable header: {}", e)))?
        .clone();
    if found.is_empty() {
        // Zero-byte file: treat like a fresh ledger
        return Ok(Some(Vec::new()));
    }
    if found.iter().ne(header.iter().copied()) {
        return Err(BudgetError::corrupt(
            1,
            format!(
                "unexpected header '{}', expected '{}'",
                found.iter().collect::<Vec<_>>().join(","),
                header.join(",")
            ),
        ));
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or(line);
                rows.push((line, record.clone()));
            }
            Ok(false) => break,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(line);
                return Err(BudgetError::corrupt(line, e.to_string()));
            }
        }
    }

    Ok(Some(rows))
}

/// Append one record, writing the header first if the file is new or empty
pub fn append_csv_record(
    path: &Path,
    header: &[&str],
    record: &StringRecord,
) -> Result<(), BudgetError> {
    ensure_parent(path)?;

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().from_writer(file);
    if needs_header {
        writer.write_record(header)?;
    }
    writer.write_record(record)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace the whole file with `header` followed by `records`
///
/// Writes to a sibling temp file, syncs it, then renames it over `path`.
pub fn write_csv_atomic<I>(path: &Path, header: &[&str], records: I) -> Result<(), BudgetError>
where
    I: IntoIterator<Item = StringRecord>,
{
    ensure_parent(path)?;

    let temp_path = path.with_extension("csv.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(header)?;
    for record in records {
        writer.write_record(&record)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: [&str; 2] = ["Name", "Value"];

    fn rec(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_read_nonexistent_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");
        assert!(read_csv_records(&path, &HEADER).unwrap().is_none());
    }

    #[test]
    fn test_create_with_header_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ledger.csv");

        assert!(create_with_header(&path, &HEADER).unwrap());
        append_csv_record(&path, &HEADER, &rec(&["a", "1"])).unwrap();
        assert!(!create_with_header(&path, &HEADER).unwrap());

        let rows = read_csv_records(&path, &HEADER).unwrap().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_append_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        append_csv_record(&path, &HEADER, &rec(&["a", "1"])).unwrap();
        append_csv_record(&path, &HEADER, &rec(&["b, with comma", "2"])).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Name,Value\na,1\n\"b, with comma\",2\n");

        let rows = read_csv_records(&path, &HEADER).unwrap().unwrap();
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[1].0, 3);
        assert_eq!(&rows[1].1[0], "b, with comma");
    }

    #[test]
    fn test_atomic_rewrite_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        append_csv_record(&path, &HEADER, &rec(&["a", "1"])).unwrap();
        write_csv_atomic(&path, &HEADER, vec![rec(&["z", "9"])]).unwrap();

        assert!(!temp_dir.path().join("ledger.csv.tmp").exists());
        let rows = read_csv_records(&path, &HEADER).unwrap().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0].1[0], "z");
    }

    #[test]
    fn test_wrong_header_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Foo,Bar\n1,2\n").unwrap();

        let err = read_csv_records(&path, &HEADER).unwrap_err();
        assert!(matches!(err, BudgetError::CorruptRecord { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Name,Value\na,1\n\nb,2\n").unwrap();

        let rows = read_csv_records(&path, &HEADER).unwrap().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
