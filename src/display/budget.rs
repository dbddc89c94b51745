//! Budget table rendering

use tabled::{Table, Tabled};

use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Render budgets as a table
pub fn budget_table(budgets: &[Budget]) -> String {
    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.to_string(),
            period: b.period.to_string(),
            category: b.category.clone(),
            limit: b.limit.to_string(),
            spent: b.spent.to_string(),
            used: match b.percent_used() {
                Some(pct) => format!("{:.1}%", pct),
                None => "-".to_string(),
            },
        })
        .collect();

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period};

    #[test]
    fn test_table_contains_fields() {
        let mut budget = Budget::new("Groceries", Money::from_units(500), Period::new(2025, 1));
        budget.spent = Money::from_units(250);

        let table = budget_table(&[budget]);
        assert!(table.contains("Groceries"));
        assert!(table.contains("2025-01"));
        assert!(table.contains("50.0%"));
    }

    #[test]
    fn test_zero_limit_shows_dash() {
        let mut budget = Budget::new("Misc", Money::zero(), Period::new(2025, 1));
        budget.spent = Money::from_units(10);

        let table = budget_table(&[budget]);
        assert!(table.contains('-'));
    }
}
