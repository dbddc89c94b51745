//! Investment service
//!
//! Business logic for investment records. The current value is fixed at
//! creation from the return rate; there is no revaluation pass.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{WealthError, WealthResult};
use crate::models::{Investment, InvestmentId, Money};
use crate::storage::Storage;

/// Service for investment management
pub struct InvestmentService<'a> {
    storage: &'a Storage,
}

impl<'a> InvestmentService<'a> {
    /// Create a new investment service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create an investment, computing its current value from the rate
    pub fn create(
        &self,
        kind: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        return_rate: f64,
    ) -> WealthResult<Investment> {
        let investment = Investment::new(kind.into().trim().to_string(), amount, date, return_rate);

        investment
            .validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        self.storage.investments.upsert(investment.clone())?;
        self.storage.investments.save()?;

        self.storage.log_create(
            EntityType::Investment,
            investment.id.to_string(),
            Some(investment.kind.clone()),
            &investment,
        )?;

        Ok(investment)
    }

    /// Get an investment by ID
    pub fn get(&self, id: InvestmentId) -> WealthResult<Option<Investment>> {
        self.storage.investments.get(id)
    }

    /// List all investments, newest first
    pub fn list(&self) -> WealthResult<Vec<Investment>> {
        self.storage.investments.get_all()
    }

    /// Total invested and total current value across all records
    pub fn totals(&self) -> WealthResult<(Money, Money)> {
        let investments = self.storage.investments.get_all()?;
        let invested: Money = investments.iter().map(|i| i.amount).sum();
        let current: Money = investments.iter().map(|i| i.current_value).sum();
        Ok((invested, current))
    }

    /// Delete an investment
    pub fn delete(&self, id: InvestmentId) -> WealthResult<Investment> {
        let investment = self
            .storage
            .investments
            .get(id)?
            .ok_or_else(|| WealthError::investment_not_found(id.to_string()))?;

        self.storage.investments.delete(id)?;
        self.storage.investments.save()?;

        self.storage.log_delete(
            EntityType::Investment,
            id.to_string(),
            Some(investment.kind.clone()),
            &investment,
        )?;

        Ok(investment)
    }

    /// Count investments
    pub fn count(&self) -> WealthResult<usize> {
        self.storage.investments.count()
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

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_create_computes_current_value() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvestmentService::new(&storage);

        let inv = service
            .create("stocks", Money::from_units(1000), test_date(), 5.5)
            .unwrap();

        assert_eq!(inv.current_value.cents(), 105500);
    }

    #[test]
    fn test_create_empty_kind_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvestmentService::new(&storage);

        let result = service.create("  ", Money::from_units(1000), test_date(), 5.0);
        assert!(matches!(result, Err(WealthError::Validation(_))));
    }

    #[test]
    fn test_totals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvestmentService::new(&storage);

        service
            .create("stocks", Money::from_units(1000), test_date(), 10.0)
            .unwrap();
        service
            .create("bonds", Money::from_units(500), test_date(), 0.0)
            .unwrap();

        let (invested, current) = service.totals().unwrap();
        assert_eq!(invested, Money::from_units(1500));
        assert_eq!(current, Money::from_units(1600));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvestmentService::new(&storage);

        let inv = service
            .create("stocks", Money::from_units(1000), test_date(), 5.0)
            .unwrap();
        service.delete(inv.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);

        let result = service.delete(inv.id);
        assert!(matches!(result, Err(WealthError::NotFound { .. })));
    }
}
