//! JSON export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{WealthError, WealthResult};
use crate::models::Transaction;

/// Write transactions to a JSON file
pub fn export_transactions<P: AsRef<Path>>(
    transactions: &[Transaction],
    path: P,
) -> WealthResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| WealthError::Export(format!("Failed to create JSON file: {}", e)))?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, transactions)
        .map_err(|e| WealthError::Export(format!("Failed to write JSON: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_units(1000),
            "Salary",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );

        export_transactions(&[txn.clone()], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Transaction> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, txn.id);
    }
}
