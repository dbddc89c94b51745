//! Budget repository
//!
//! Persists budgets and answers the (category, period) lookup the expense
//! commit path depends on.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::WealthError;
use crate::models::{Budget, BudgetId, Period};

use super::backend::DocumentBackend;

/// Serializable budget document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    backend: DocumentBackend,
    data: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(backend: DocumentBackend) -> Self {
        Self {
            backend,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from the backend
    pub fn load(&self) -> Result<(), WealthError> {
        let file_data: BudgetData = self.backend.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            data.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to the backend
    pub fn save(&self) -> Result<(), WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| {
            b.period
                .cmp(&a.period)
                .then_with(|| a.category.cmp(&b.category))
        });

        let file_data = BudgetData { budgets };
        self.backend.save(&file_data)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all budgets, newest period first
    pub fn get_all(&self) -> Result<Vec<Budget>, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| {
            b.period
                .cmp(&a.period)
                .then_with(|| a.category.cmp(&b.category))
        });
        Ok(budgets)
    }

    /// Get all budgets for a period
    pub fn get_for_period(&self, period: &Period) -> Result<Vec<Budget>, WealthError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|b| b.period == *period).collect())
    }

    /// Find the budget matching a category and period
    ///
    /// One budget per (category, period) is the expected shape; if
    /// duplicates exist the first match by the stable get_all order wins.
    pub fn find_matching(
        &self,
        category: &str,
        period: &Period,
    ) -> Result<Option<Budget>, WealthError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .find(|b| b.category == category && b.period == *period))
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> Result<bool, WealthError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, WealthError> {
        let data = self
            .data
            .read()
            .map_err(|e| WealthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let backend = DocumentBackend::json(temp_dir.path().join("budgets.json"));
        let repo = BudgetRepository::new(backend);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = Budget::new("Groceries", Money::from_units(500), Period::new(2025, 1));
        let id = budget.id;
        repo.upsert(budget).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.category, "Groceries");
    }

    #[test]
    fn test_find_matching() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let jan = Period::new(2025, 1);
        let feb = Period::new(2025, 2);
        repo.upsert(Budget::new("Groceries", Money::from_units(500), jan))
            .unwrap();
        repo.upsert(Budget::new("Groceries", Money::from_units(600), feb))
            .unwrap();

        let found = repo.find_matching("Groceries", &jan).unwrap().unwrap();
        assert_eq!(found.limit, Money::from_units(500));

        assert!(repo.find_matching("Transport", &jan).unwrap().is_none());
        assert!(repo
            .find_matching("Groceries", &Period::new(2025, 3))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_get_for_period() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let jan = Period::new(2025, 1);
        repo.upsert(Budget::new("Groceries", Money::from_units(500), jan))
            .unwrap();
        repo.upsert(Budget::new("Transport", Money::from_units(200), jan))
            .unwrap();
        repo.upsert(Budget::new(
            "Groceries",
            Money::from_units(500),
            Period::new(2025, 2),
        ))
        .unwrap();

        assert_eq!(repo.get_for_period(&jan).unwrap().len(), 2);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = Budget::new("Groceries", Money::from_units(500), Period::new(2025, 1));
        let id = budget.id;
        repo.upsert(budget).unwrap();
        repo.save().unwrap();

        let backend = DocumentBackend::json(temp_dir.path().join("budgets.json"));
        let repo2 = BudgetRepository::new(backend);
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.limit, Money::from_units(500));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = Budget::new("Groceries", Money::from_units(500), Period::new(2025, 1));
        let id = budget.id;
        repo.upsert(budget).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
