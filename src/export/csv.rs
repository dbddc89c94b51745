//! CSV export

use std::path::Path;

use serde::Serialize;

use crate::error::WealthResult;
use crate::models::Transaction;

/// Flat CSV row for a transaction
///
/// Amounts are exported in cents so the CSV round-trips exactly.
#[derive(Debug, Serialize)]
struct CsvTransaction<'a> {
    id: String,
    date: String,
    kind: &'a str,
    category: &'a str,
    description: &'a str,
    amount_cents: i64,
}

/// Write transactions to a CSV file
pub fn export_transactions<P: AsRef<Path>>(
    transactions: &[Transaction],
    path: P,
) -> WealthResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    for txn in transactions {
        writer.serialize(CsvTransaction {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: match txn.kind {
                crate::models::TransactionKind::Income => "income",
                crate::models::TransactionKind::Expense => "expense",
            },
            category: &txn.category,
            description: &txn.description,
            amount_cents: txn.amount.cents(),
        })?;
    }

    writer.flush().map_err(|e| {
        crate::error::WealthError::Export(format!("Failed to flush CSV output: {}", e))
    })?;

    Ok(())
}
