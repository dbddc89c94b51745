//! Investment table rendering

use tabled::{Table, Tabled};

use crate::models::Investment;

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Invested")]
    amount: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Current value")]
    current_value: String,
}

/// Render investments as a table
pub fn investment_table(investments: &[Investment]) -> String {
    let rows: Vec<InvestmentRow> = investments
        .iter()
        .map(|i| InvestmentRow {
            id: i.id.to_string(),
            kind: i.kind.clone(),
            date: i.date.format("%Y-%m-%d").to_string(),
            amount: i.amount.to_string(),
            rate: format!("{:.1}%", i.return_rate),
            current_value: i.current_value.to_string(),
        })
        .collect();

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_table_contains_fields() {
        let inv = Investment::new(
            "stocks",
            Money::from_units(1000),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            5.5,
        );

        let table = investment_table(&[inv]);
        assert!(table.contains("stocks"));
        assert!(table.contains("5.5%"));
        assert!(table.contains("Kz 1055.00"));
    }
}
