//! Goal service
//!
//! Business logic for financial goals: creation, clamped progress updates,
//! and deletion.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{WealthError, WealthResult};
use crate::models::{FinancialGoal, GoalCategory, GoalId, Money};
use crate::storage::Storage;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub title: String,
    pub target_amount: Money,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub description: Option<String>,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal with no progress yet
    pub fn create(&self, input: CreateGoalInput) -> WealthResult<FinancialGoal> {
        let mut goal = FinancialGoal::new(
            input.title.trim().to_string(),
            input.target_amount,
            input.target_date,
            input.category,
        );

        if let Some(description) = input.description {
            goal.description = description;
        }

        goal.validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> WealthResult<Option<FinancialGoal>> {
        self.storage.goals.get(id)
    }

    /// List all goals, nearest deadline first
    pub fn list(&self) -> WealthResult<Vec<FinancialGoal>> {
        self.storage.goals.get_all()
    }

    /// Add progress toward a goal, clamped to the target amount
    pub fn add_progress(&self, id: GoalId, amount: Money) -> WealthResult<FinancialGoal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| WealthError::goal_not_found(id.to_string()))?;

        let before = goal.clone();
        goal.add_progress(amount);

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &before,
            &goal,
            Some(format!(
                "progress: {} -> {}",
                before.current_amount, goal.current_amount
            )),
        )?;

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> WealthResult<FinancialGoal> {
        let goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| WealthError::goal_not_found(id.to_string()))?;

        self.storage.goals.delete(id)?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Count goals
    pub fn count(&self) -> WealthResult<usize> {
        self.storage.goals.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendKind, WealthPaths};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, BackendKind::Json).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(target_units: i64) -> CreateGoalInput {
        CreateGoalInput {
            title: "Emergency fund".to_string(),
            target_amount: Money::from_units(target_units),
            target_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            category: GoalCategory::EmergencyFund,
            description: None,
        }
    }

    #[test]
    fn test_create_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input(1000)).unwrap();
        assert_eq!(goal.title, "Emergency fund");
        assert!(goal.current_amount.is_zero());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_create_empty_title_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let mut bad = input(1000);
        bad.title = "  ".to_string();
        assert!(matches!(
            service.create(bad),
            Err(WealthError::Validation(_))
        ));
    }

    #[test]
    fn test_add_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input(1000)).unwrap();
        let updated = service
            .add_progress(goal.id, Money::from_units(250))
            .unwrap();

        assert_eq!(updated.current_amount, Money::from_units(250));
    }

    #[test]
    fn test_add_progress_clamped_at_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input(1000)).unwrap();
        let updated = service
            .add_progress(goal.id, Money::from_units(1500))
            .unwrap();

        assert_eq!(updated.current_amount, Money::from_units(1000));
        assert!(updated.is_complete());
    }

    #[test]
    fn test_add_progress_missing_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.add_progress(GoalId::new(), Money::from_units(100));
        assert!(matches!(result, Err(WealthError::NotFound { .. })));
    }

    #[test]
    fn test_delete_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input(1000)).unwrap();
        service.delete(goal.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }
}
