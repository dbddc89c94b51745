//! Budget evaluation
//!
//! Scans the budgets of a reference period and emits a candidate alert for
//! every budget whose spending has crossed the 80% warning ratio.

use crate::models::{Alert, AlertKind, Budget, Period, Severity};

/// Evaluate all budgets against the reference period
///
/// Budgets outside the period are ignored. Output preserves input order;
/// one alert per over-threshold budget:
/// - severity High when spent exceeds the limit, Medium otherwise;
/// - the description carries percent used (one decimal) and the absolute
///   spent/limit amounts.
///
/// A zero-limit budget has no defined percentage; any spending against it
/// is reported as High with the description stating the limit is zero.
pub fn evaluate_budgets(budgets: &[Budget], period: &Period) -> Vec<Alert> {
    budgets
        .iter()
        .filter(|b| b.period == *period && b.is_near_limit())
        .map(budget_alert)
        .collect()
}

fn budget_alert(budget: &Budget) -> Alert {
    let severity = if budget.is_over_limit() || budget.limit.is_zero() {
        Severity::High
    } else {
        Severity::Medium
    };

    let description = match budget.percent_used() {
        Some(pct) => format!(
            "{:.1}% of the budget used ({} / {})",
            pct, budget.spent, budget.limit
        ),
        None => format!(
            "Spending of {} recorded against a zero budget limit",
            budget.spent
        ),
    };

    Alert::new(
        AlertKind::BudgetExceeded,
        format!("Budget exceeded: {}", budget.category),
        description,
        severity,
    )
}
