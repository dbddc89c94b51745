//! Alerts CLI command

use crate::config::Settings;
use crate::display::alert_table;
use crate::error::WealthResult;
use crate::services::AlertService;
use crate::storage::Storage;

/// Compute and print the current alert list and balance summary
pub fn handle_alerts_command(storage: &Storage, settings: &Settings) -> WealthResult<()> {
    let service = AlertService::new(storage, settings.low_balance_threshold);

    let today = chrono::Local::now().date_naive();
    let alerts = service.compute(today)?;
    let summary = service.balance()?;

    if alerts.is_empty() {
        println!("No alerts. Everything looks in order.");
    } else {
        println!("{}", alert_table(&alerts));
    }

    println!();
    println!("Total income:   {}", summary.income);
    println!("Total expenses: {}", summary.expenses);
    println!("Balance:        {}", summary.balance);

    Ok(())
}
