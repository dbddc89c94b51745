//! Investment repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::WealthError;
use crate::models::{Investment, InvestmentId};

use super::backend::DocumentBackend;

/// Serializable investment document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct InvestmentData {
    investments: Vec<Investment>,
}

/// Repository for investment persistence
pub struct InvestmentRepository {
    backend: DocumentBackend,
    data: RwLock<HashMap<InvestmentId, Investment>>,
}

impl InvestmentRepository {
    /// Create a new investment repository
    pub fn new(backend: DocumentBackend) -> Self {
        Self {
            backend,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load investments from the backend
    pub fn load(&self) -> Result<(), WealthError> {
        let file_data: InvestmentData = self.backend.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for investment in file_data.investments {
            data.insert(investment.id, investment);
        }

        Ok(())
    }

    /// Save investments to the backend
    pub fn save(&self) -> Result<(), WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut investments: Vec<_> = data.values().cloned().collect();
        investments.sort_by(|a, b| b.date.cmp(&a.date));

        let file_data = InvestmentData { investments };
        self.backend.save(&file_data)
    }

    /// Get an investment by ID
    pub fn get(&self, id: InvestmentId) -> Result<Option<Investment>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all investments, newest first
    pub fn get_all(&self) -> Result<Vec<Investment>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut investments: Vec<_> = data.values().cloned().collect();
        investments.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(investments)
    }

    /// Insert or update an investment
    pub fn upsert(&self, investment: Investment) -> Result<(), WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(investment.id, investment);
        Ok(())
    }

    /// Delete an investment
    pub fn delete(&self, id: InvestmentId) -> Result<bool, WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count investments
    pub fn count(&self) -> Result<usize, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
