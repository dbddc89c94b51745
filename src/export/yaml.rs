//! YAML export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{WealthError, WealthResult};
use crate::models::Transaction;

/// Write transactions to a YAML file
pub fn export_transactions<P: AsRef<Path>>(
    transactions: &[Transaction],
    path: P,
) -> WealthResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| WealthError::Export(format!("Failed to create YAML file: {}", e)))?;

    let writer = BufWriter::new(file);
    serde_yaml::to_writer(writer, transactions)
        .map_err(|e| WealthError::Export(format!("Failed to write YAML: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.yaml");

        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_units(50),
            "Groceries",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );

        export_transactions(&[txn], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("category: Groceries"));
    }
}
