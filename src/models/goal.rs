//! Financial goal model
//!
//! A savings target with a deadline. Progress is clamped so the saved amount
//! never exceeds the target.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// What kind of goal this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Savings,
    Investment,
    DebtPayment,
    EmergencyFund,
    Other,
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => write!(f, "Savings"),
            Self::Investment => write!(f, "Investment"),
            Self::DebtPayment => write!(f, "Debt payment"),
            Self::EmergencyFund => write!(f, "Emergency fund"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            "debt_payment" | "debt-payment" => Ok(Self::DebtPayment),
            "emergency_fund" | "emergency-fund" => Ok(Self::EmergencyFund),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown goal category: {}", other)),
        }
    }
}

/// A financial goal with a target amount and deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Short goal title ("Emergency fund", "New laptop")
    pub title: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far; never exceeds `target_amount`
    pub current_amount: Money,

    /// Deadline for reaching the target
    pub target_date: NaiveDate,

    /// Goal classification
    pub category: GoalCategory,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the goal was created
    pub created_date: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Create a new goal with no progress yet
    pub fn new(
        title: impl Into<String>,
        target_amount: Money,
        target_date: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount: Money::zero(),
            target_date,
            category,
            description: String::new(),
            created_date: now,
            updated_at: now,
        }
    }

    /// Percentage of the target reached, or `None` when the target is zero
    pub fn progress_percent(&self) -> Option<f64> {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Whole days from `today` until the target date; negative when overdue
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    /// Check if the saved amount has reached the target
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Add progress toward the goal, clamped to the target amount
    ///
    /// Negative contributions are clamped at zero so progress never goes
    /// below nothing-saved.
    pub fn add_progress(&mut self, amount: Money) {
        let next = self.current_amount + amount;
        self.current_amount = if next > self.target_amount {
            self.target_amount
        } else if next.is_negative() {
            Money::zero()
        } else {
            next
        };
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTarget);
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeProgress);
        }

        if self.current_amount > self.target_amount {
            return Err(GoalValidationError::ProgressExceedsTarget);
        }

        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }

        Ok(())
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} by {}",
            self.title,
            self.current_amount,
            self.target_amount,
            self.target_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NegativeTarget,
    NegativeProgress,
    ProgressExceedsTarget,
    EmptyTitle,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTarget => write!(f, "Goal target amount cannot be negative"),
            Self::NegativeProgress => write!(f, "Goal progress cannot be negative"),
            Self::ProgressExceedsTarget => {
                write!(f, "Goal progress cannot exceed the target amount")
            }
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_goal(target_cents: i64, current_cents: i64) -> FinancialGoal {
        let mut goal = FinancialGoal::new(
            "Emergency fund",
            Money::from_cents(target_cents),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            GoalCategory::EmergencyFund,
        );
        goal.current_amount = Money::from_cents(current_cents);
        goal
    }

    #[test]
    fn test_new_goal() {
        let goal = FinancialGoal::new(
            "New laptop",
            Money::from_units(2000),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            GoalCategory::Savings,
        );
        assert_eq!(goal.title, "New laptop");
        assert!(goal.current_amount.is_zero());
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_progress_percent() {
        let goal = test_goal(100000, 50000);
        let pct = goal.progress_percent().unwrap();
        assert!((pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        let goal = test_goal(0, 0);
        assert_eq!(goal.progress_percent(), None);
    }

    #[test]
    fn test_days_until() {
        let goal = test_goal(100000, 0);
        let today = NaiveDate::from_ymd_opt(2025, 5, 22).unwrap();
        assert_eq!(goal.days_until(today), 10);

        let after = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(goal.days_until(after), -4);
    }

    #[test]
    fn test_add_progress_clamped_at_target() {
        let mut goal = test_goal(100000, 90000);
        goal.add_progress(Money::from_cents(50000));
        assert_eq!(goal.current_amount.cents(), 100000);
        assert!(goal.is_complete());
    }

    #[test]
    fn test_add_progress_clamped_at_zero() {
        let mut goal = test_goal(100000, 20000);
        goal.add_progress(Money::from_cents(-50000));
        assert!(goal.current_amount.is_zero());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "debt_payment".parse::<GoalCategory>().unwrap(),
            GoalCategory::DebtPayment
        );
        assert_eq!(
            "emergency-fund".parse::<GoalCategory>().unwrap(),
            GoalCategory::EmergencyFund
        );
        assert!("retirement".parse::<GoalCategory>().is_err());
    }

    #[test]
    fn test_validation() {
        assert!(test_goal(100000, 50000).validate().is_ok());

        let mut bad = test_goal(100000, 50000);
        bad.current_amount = Money::from_cents(150000);
        assert_eq!(
            bad.validate(),
            Err(GoalValidationError::ProgressExceedsTarget)
        );

        let mut bad = test_goal(100000, 0);
        bad.title = String::new();
        assert_eq!(bad.validate(), Err(GoalValidationError::EmptyTitle));
    }

    #[test]
    fn test_serialization() {
        let goal = test_goal(100000, 25000);
        let json = serde_json::to_string(&goal).unwrap();
        let deserialized: FinancialGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, deserialized.id);
        assert_eq!(goal.target_amount, deserialized.target_amount);
        assert_eq!(goal.category, deserialized.category);
    }
}
