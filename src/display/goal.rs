//! Goal table rendering

use tabled::{Table, Tabled};

use crate::models::FinancialGoal;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Render goals as a table
pub fn goal_table(goals: &[FinancialGoal]) -> String {
    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            id: g.id.to_string(),
            title: g.title.clone(),
            category: g.category.to_string(),
            progress: match g.progress_percent() {
                Some(pct) => format!("{} ({:.1}%)", g.current_amount, pct),
                None => g.current_amount.to_string(),
            },
            target: g.target_amount.to_string(),
            deadline: g.target_date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Table::new(rows).to_string()
}
