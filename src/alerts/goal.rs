//! Goal risk evaluation
//!
//! Flags goals whose deadline is approaching faster than their progress.

use chrono::NaiveDate;

use crate::models::{Alert, AlertKind, FinancialGoal, Severity};

/// Days-to-deadline window for the progress-below-80% rule
const NEAR_WINDOW_DAYS: i64 = 30;
/// Days-to-deadline window for the progress-below-100% rule
const FINAL_WINDOW_DAYS: i64 = 7;

/// Evaluate all goals against today's date
///
/// A goal is at risk when either rule holds:
/// - 30 days or less remain and progress is below 80%;
/// - 7 days or less remain and progress is below 100%.
///
/// The rules are checked independently but a goal emits at most one alert,
/// always Medium. Overdue goals (negative days remaining) satisfy both
/// windows. A goal with a zero target has no defined progress and is
/// treated as already complete, so it is skipped.
pub fn evaluate_goals(goals: &[FinancialGoal], today: NaiveDate) -> Vec<Alert> {
    goals
        .iter()
        .filter(|g| is_at_risk(g, today))
        .map(goal_alert)
        .collect()
}

fn is_at_risk(goal: &FinancialGoal, today: NaiveDate) -> bool {
    let progress = match goal.progress_percent() {
        Some(p) => p,
        None => return false,
    };

    let days = goal.days_until(today);

    (days <= NEAR_WINDOW_DAYS && progress < 80.0)
        || (days <= FINAL_WINDOW_DAYS && progress < 100.0)
}

fn goal_alert(goal: &FinancialGoal) -> Alert {
    // is_at_risk already rejected zero targets
    let progress = goal.progress_percent().unwrap_or(100.0);

    Alert::new(
        AlertKind::GoalReminder,
        format!("Goal at risk: {}", goal.title),
        format!(
            "Target of {} is {:.1}% complete. Deadline: {}",
            goal.target_amount,
            progress,
            goal.target_date.format("%Y-%m-%d")
        ),
        Severity::Medium,
    )
}
