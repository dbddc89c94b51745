//! Investment model
//!
//! Records an invested amount with its expected return rate. The current
//! value is computed once at creation from the return rate and is not
//! revalued over time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;

/// An investment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier
    pub id: InvestmentId,

    /// Free-text investment type ("stocks", "bonds", "real estate", ...)
    pub kind: String,

    /// Amount invested
    pub amount: Money,

    /// Date of the investment
    pub date: NaiveDate,

    /// Expected return rate as a percentage
    pub return_rate: f64,

    /// amount × (1 + return_rate/100), fixed at creation
    pub current_value: Money,

    /// When the investment was created
    pub created_at: DateTime<Utc>,

    /// When the investment was last modified
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    /// Create a new investment, computing its current value from the rate
    pub fn new(kind: impl Into<String>, amount: Money, date: NaiveDate, return_rate: f64) -> Self {
        let now = Utc::now();
        Self {
            id: InvestmentId::new(),
            kind: kind.into(),
            amount,
            date,
            return_rate,
            current_value: amount.scale(1.0 + return_rate / 100.0),
            created_at: now,
            updated_at: now,
        }
    }

    /// The gain (or loss) implied by the return rate
    pub fn projected_gain(&self) -> Money {
        self.current_value - self.amount
    }

    /// Validate the investment
    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.amount.is_negative() {
            return Err(InvestmentValidationError::NegativeAmount);
        }

        if self.kind.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyKind);
        }

        if !self.return_rate.is_finite() {
            return Err(InvestmentValidationError::InvalidRate(self.return_rate));
        }

        Ok(())
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {:.1}% -> {}",
            self.kind, self.amount, self.return_rate, self.current_value
        )
    }
}

/// Validation errors for investments
#[derive(Debug, Clone, PartialEq)]
pub enum InvestmentValidationError {
    NegativeAmount,
    EmptyKind,
    InvalidRate(f64),
}

impl fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Investment amount cannot be negative"),
            Self::EmptyKind => write!(f, "Investment type cannot be empty"),
            Self::InvalidRate(rate) => write!(f, "Invalid return rate: {}", rate),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}
