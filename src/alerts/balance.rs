//! Balance calculation
//!
//! Pure reduction of a transaction list to total income, total expenses, and
//! net balance, plus the balance-level alert rule.

use crate::models::{Alert, AlertKind, Money, Severity, Transaction};

/// Balance below this threshold (but not negative) raises a low-balance
/// warning. Expressed in whole currency units.
pub const LOW_BALANCE_THRESHOLD: Money = Money::from_units(1000);

/// Totals derived from a transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSummary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expenses: Money,
    /// income − expenses; may be negative
    pub balance: Money,
}

impl BalanceSummary {
    /// An all-zero summary (the result for an empty transaction list)
    pub fn empty() -> Self {
        Self {
            income: Money::zero(),
            expenses: Money::zero(),
            balance: Money::zero(),
        }
    }
}

/// Reduce a transaction list to its balance summary
///
/// Total over any input: an empty list yields all zeros. Integer cent
/// arithmetic makes the result exact and independent of list order.
pub fn compute_balance(transactions: &[Transaction]) -> BalanceSummary {
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    BalanceSummary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// The balance alert, if the balance warrants one
///
/// Mutually exclusive rules in priority order: negative balance is High,
/// a balance below the threshold is Medium, anything else is no alert.
pub fn balance_alert(summary: &BalanceSummary, threshold: Money) -> Option<Alert> {
    if summary.balance.is_negative() {
        Some(Alert::new(
            AlertKind::NegativeBalance,
            "Negative balance",
            format!(
                "Your current balance is {}. Consider reducing expenses or adding income.",
                summary.balance
            ),
            Severity::High,
        ))
    } else if summary.balance < threshold {
        Some(Alert::new(
            AlertKind::LowBalance,
            "Low balance",
            format!(
                "Your current balance is {}. Keeping a larger reserve for emergencies is recommended.",
                summary.balance
            ),
            Severity::Medium,
        ))
    } else {
        None
    }
}
