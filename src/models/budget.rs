//! Budget model
//!
//! Tracks a per-category spending limit for one calendar month, together with
//! the amount already spent against it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;

/// A monthly spending limit for one category
///
/// One budget per (category, period) is the expected shape; this is not
/// enforced by a uniqueness constraint, and lookups take the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget limits
    pub category: String,

    /// Spending limit for the period
    pub limit: Money,

    /// Amount spent so far, increased by matching expense transactions
    pub spent: Money,

    /// The calendar month this budget covers
    pub period: Period,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with nothing spent yet
    pub fn new(category: impl Into<String>, limit: Money, period: Period) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            spent: Money::zero(),
            period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Percentage of the limit used, or `None` when the limit is zero
    pub fn percent_used(&self) -> Option<f64> {
        self.spent.percent_of(self.limit)
    }

    /// Check if spending has exceeded the limit
    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }

    /// Check if spending has crossed the warning ratio (80% of the limit)
    ///
    /// Evaluated in integer cents (`spent * 10 > limit * 8`) so the
    /// threshold is exact. A zero limit warns as soon as anything is spent.
    pub fn is_near_limit(&self) -> bool {
        self.spent.cents() * 10 > self.limit.cents() * 8
    }

    /// Record an expense against this budget
    pub fn record_expense(&mut self, amount: Money) {
        self.spent += amount;
        self.updated_at = Utc::now();
    }

    /// Replace the spending limit
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }

        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent);
        }

        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} / {}",
            self.period, self.category, self.spent, self.limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit,
    NegativeSpent,
    EmptyCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
            Self::NegativeSpent => write!(f, "Budget spent amount cannot be negative"),
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
