//! Goal repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::WealthError;
use crate::models::{FinancialGoal, GoalId};

use super::backend::DocumentBackend;

/// Serializable goal document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<FinancialGoal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    backend: DocumentBackend,
    data: RwLock<HashMap<GoalId, FinancialGoal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(backend: DocumentBackend) -> Self {
        Self {
            backend,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from the backend
    pub fn load(&self) -> Result<(), WealthError> {
        let file_data: GoalData = self.backend.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to the backend
    pub fn save(&self) -> Result<(), WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.target_date.cmp(&b.target_date));

        let file_data = GoalData { goals };
        self.backend.save(&file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<FinancialGoal>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all goals ordered by target date (nearest deadline first)
    pub fn get_all(&self) -> Result<Vec<FinancialGoal>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.target_date.cmp(&b.target_date));
        Ok(goals)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: FinancialGoal) -> Result<(), WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> Result<bool, WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
