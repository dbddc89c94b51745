//! Transaction repository
//!
//! In-memory indexed map of transactions persisted as one JSON document.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::WealthError;
use crate::models::{Transaction, TransactionId, TransactionKind};

use super::backend::DocumentBackend;

/// Serializable transaction document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a category index
pub struct TransactionRepository {
    backend: DocumentBackend,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: category -> transaction_ids
    by_category: RwLock<HashMap<String, Vec<TransactionId>>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(backend: DocumentBackend) -> Self {
        Self {
            backend,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from the backend and rebuild the index
    pub fn load(&self) -> Result<(), WealthError> {
        let file_data: TransactionData = self.backend.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_category.clear();

        for txn in file_data.transactions {
            by_category
                .entry(txn.category.clone())
                .or_default()
                .push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to the backend
    pub fn save(&self) -> Result<(), WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions };
        self.backend.save(&file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Get transactions for a category, newest first
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Transaction>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_category = self
            .by_category
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_category
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Get transactions of one kind (income or expense)
    pub fn get_by_kind(&self, kind: TransactionKind) -> Result<Vec<Transaction>, WealthError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.kind == kind).collect())
    }

    /// Get transactions in a date range (inclusive)
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, WealthError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from the old index entry if the category changed
        if let Some(old) = data.get(&txn.id) {
            if old.category != txn.category {
                if let Some(ids) = by_category.get_mut(&old.category) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        let ids = by_category.entry(txn.category.clone()).or_default();
        if !ids.contains(&txn.id) {
            ids.push(txn.id);
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(ids) = by_category.get_mut(&txn.category) {
                ids.retain(|&tid| tid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
