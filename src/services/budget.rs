//! Budget service
//!
//! Business logic for monthly category budgets: creation, limit changes,
//! and the spent-amount bookkeeping driven by committed expenses.

use crate::audit::EntityType;
use crate::error::{WealthError, WealthResult};
use crate::models::{Budget, BudgetId, Money, Period};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget for a category and period with nothing spent
    ///
    /// One budget per (category, period) is the expected shape but is not
    /// enforced; creating a duplicate is allowed and the first match wins
    /// for expense tracking.
    pub fn create(
        &self,
        category: impl Into<String>,
        limit: Money,
        period: Period,
    ) -> WealthResult<Budget> {
        let budget = Budget::new(category, limit, period);

        budget
            .validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.log_create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(format!("{} {}", budget.period, budget.category)),
            &budget,
        )?;

        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> WealthResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// List all budgets, or only those for one period
    pub fn list(&self, period: Option<Period>) -> WealthResult<Vec<Budget>> {
        match period {
            Some(period) => self.storage.budgets.get_for_period(&period),
            None => self.storage.budgets.get_all(),
        }
    }

    /// Replace a budget's spending limit
    pub fn set_limit(&self, id: BudgetId, limit: Money) -> WealthResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| WealthError::budget_not_found(id.to_string()))?;

        let before = budget.clone();
        budget.set_limit(limit);

        budget
            .validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.log_update(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.category.clone()),
            &before,
            &budget,
            Some(format!("limit: {} -> {}", before.limit, budget.limit)),
        )?;

        Ok(budget)
    }

    /// Record an expense against the budget matching (category, period)
    ///
    /// Returns the updated budget, or `None` when no budget tracks that
    /// category and month: absence is normal, not an error, and no budget
    /// is auto-created.
    pub fn record_expense(
        &self,
        category: &str,
        period: &Period,
        amount: Money,
    ) -> WealthResult<Option<Budget>> {
        let budget = match self.storage.budgets.find_matching(category, period)? {
            Some(budget) => budget,
            None => return Ok(None),
        };

        let before = budget.clone();
        let mut budget = budget;
        budget.record_expense(amount);

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.log_update(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.category.clone()),
            &before,
            &budget,
            Some(format!("spent: {} -> {}", before.spent, budget.spent)),
        )?;

        Ok(Some(budget))
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> WealthResult<Budget> {
        let budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| WealthError::budget_not_found(id.to_string()))?;

        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()?;

        self.storage.log_delete(
            EntityType::Budget,
            id.to_string(),
            Some(format!("{} {}", budget.period, budget.category)),
            &budget,
        )?;

        Ok(budget)
    }

    /// Count budgets
    pub fn count(&self) -> WealthResult<usize> {
        self.storage.budgets.count()
    }
}
