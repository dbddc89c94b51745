//! Alert table rendering

use tabled::{Table, Tabled};

use crate::models::Alert;

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render alerts as a table, preserving their computed order
pub fn alert_table(alerts: &[Alert]) -> String {
    let rows: Vec<AlertRow> = alerts
        .iter()
        .map(|a| AlertRow {
            severity: a.severity.to_string(),
            kind: a.kind.to_string(),
            title: a.title.clone(),
            description: a.description.clone(),
        })
        .collect();

    Table::new(rows).to_string()
}
