//! Alert derivation engine
//!
//! Pure, deterministic computation over a snapshot of financial records.
//! The three evaluators (balance, budget, goal) are combined by
//! [`compute_alerts`] into one ordered alert list; nothing here touches
//! storage or holds state, so a pass can be repeated freely over the same
//! snapshot and yields identical output.

pub mod balance;
pub mod budget;
pub mod goal;

pub use balance::{balance_alert, compute_balance, BalanceSummary, LOW_BALANCE_THRESHOLD};
pub use budget::evaluate_budgets;
pub use goal::evaluate_goals;

use chrono::NaiveDate;

use crate::models::{Alert, Budget, FinancialGoal, Money, Period, Transaction};

/// Derive the complete, ordered alert list for one snapshot
///
/// Insertion order is the contract: the balance alert (if any) comes first,
/// then one alert per over-threshold budget of the current month in input
/// order, then one alert per at-risk goal in input order. No cross-type
/// severity sort is applied.
pub fn compute_alerts(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[FinancialGoal],
    today: NaiveDate,
) -> Vec<Alert> {
    compute_alerts_with_threshold(transactions, budgets, goals, today, LOW_BALANCE_THRESHOLD)
}

/// [`compute_alerts`] with a caller-chosen low-balance threshold
pub fn compute_alerts_with_threshold(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[FinancialGoal],
    today: NaiveDate,
    low_balance_threshold: Money,
) -> Vec<Alert> {
    let summary = compute_balance(transactions);
    let period = Period::from_date(today);

    let mut alerts = Vec::new();
    alerts.extend(balance_alert(&summary, low_balance_threshold));
    alerts.extend(evaluate_budgets(budgets, &period));
    alerts.extend(evaluate_goals(goals, today));
    alerts
}
