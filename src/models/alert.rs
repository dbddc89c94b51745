//! Alert model
//!
//! Alerts are derived values: they are recomputed on every evaluation pass
//! from the current records and never persisted, so they carry no identifier
//! and no lifecycle fields.

use serde::Serialize;
use std::fmt;

/// What condition an alert reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    NegativeBalance,
    LowBalance,
    BudgetExceeded,
    GoalReminder,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBalance => write!(f, "negative_balance"),
            Self::LowBalance => write!(f, "low_balance"),
            Self::BudgetExceeded => write!(f, "budget_exceeded"),
            Self::GoalReminder => write!(f, "goal_reminder"),
        }
    }
}

/// Urgency tag for display ranking
///
/// Variants are declared lowest-first so the derived ordering gives
/// High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A derived warning about the current financial state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Alert {
    /// Create a new alert
    pub fn new(
        kind: AlertKind,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.title, self.description)
    }
}
