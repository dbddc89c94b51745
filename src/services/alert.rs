//! Alert service
//!
//! Bridges the record store and the pure alert engine: snapshots the
//! current records and hands them to the evaluators. Holds no state of its
//! own, so every call reflects the store as of that moment.

use chrono::NaiveDate;

use crate::alerts::{compute_alerts_with_threshold, compute_balance, BalanceSummary};
use crate::error::WealthResult;
use crate::models::{Alert, Money};
use crate::storage::Storage;

/// Service deriving alerts from the current records
pub struct AlertService<'a> {
    storage: &'a Storage,
    low_balance_threshold: Money,
}

impl<'a> AlertService<'a> {
    /// Create an alert service with the configured low-balance threshold
    pub fn new(storage: &'a Storage, low_balance_threshold: Money) -> Self {
        Self {
            storage,
            low_balance_threshold,
        }
    }

    /// Compute the ordered alert list for today's snapshot
    pub fn compute(&self, today: NaiveDate) -> WealthResult<Vec<Alert>> {
        let transactions = self.storage.transactions.get_all()?;
        let budgets = self.storage.budgets.get_all()?;
        let goals = self.storage.goals.get_all()?;

        Ok(compute_alerts_with_threshold(
            &transactions,
            &budgets,
            &goals,
            today,
            self.low_balance_threshold,
        ))
    }

    /// Current balance summary
    pub fn balance(&self) -> WealthResult<BalanceSummary> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(compute_balance(&transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendKind, WealthPaths};
    use crate::models::{
        AlertKind, Budget, FinancialGoal, GoalCategory, Period, Transaction, TransactionKind,
    };
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, BackendKind::Json).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn default_threshold() -> Money {
        Money::from_units(1000)
    }

    #[test]
    fn test_compute_over_store_snapshot() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Income,
                Money::from_units(100),
                "Salary",
                today(),
            ))
            .unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Expense,
                Money::from_units(300),
                "Rent",
                today(),
            ))
            .unwrap();

        let mut budget = Budget::new("Groceries", Money::from_units(100), Period::new(2025, 1));
        budget.spent = Money::from_units(120);
        storage.budgets.upsert(budget).unwrap();

        let mut goal = FinancialGoal::new(
            "Vacation",
            Money::from_units(1000),
            today() + Duration::days(10),
            GoalCategory::Savings,
        );
        goal.current_amount = Money::from_units(400);
        storage.goals.upsert(goal).unwrap();

        let service = AlertService::new(&storage, default_threshold());
        let alerts = service.compute(today()).unwrap();

        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::NegativeBalance,
                AlertKind::BudgetExceeded,
                AlertKind::GoalReminder,
            ]
        );
    }

    #[test]
    fn test_repeated_computation_identical() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Income,
                Money::from_units(500),
                "Salary",
                today(),
            ))
            .unwrap();

        let service = AlertService::new(&storage, default_threshold());
        let first = service.compute(today()).unwrap();
        let second = service.compute(today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_balance_summary() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Income,
                Money::from_units(1500),
                "Salary",
                today(),
            ))
            .unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Expense,
                Money::from_units(400),
                "Rent",
                today(),
            ))
            .unwrap();

        let service = AlertService::new(&storage, default_threshold());
        let summary = service.balance().unwrap();

        assert_eq!(summary.income, Money::from_units(1500));
        assert_eq!(summary.expenses, Money::from_units(400));
        assert_eq!(summary.balance, Money::from_units(1100));
    }

    #[test]
    fn test_empty_store() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AlertService::new(&storage, default_threshold());

        let summary = service.balance().unwrap();
        assert!(summary.balance.is_zero());

        // Zero balance is below the default threshold
        let alerts = service.compute(today()).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::LowBalance);
    }
}
