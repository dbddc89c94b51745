//! Transaction table rendering

use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render transactions as a table
pub fn transaction_table(transactions: &[Transaction]) -> String {
    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: t.amount.to_string(),
            description: t.description.clone(),
        })
        .collect();

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_table_contains_fields() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_units(50),
            "Groceries",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );

        let table = transaction_table(&[txn]);
        assert!(table.contains("Groceries"));
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("Kz 50.00"));
    }

    #[test]
    fn test_empty_table() {
        let table = transaction_table(&[]);
        assert!(table.is_empty() || !table.contains("Kz"));
    }
}
