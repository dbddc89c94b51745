//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod alert;
pub mod budget;
pub mod export;
pub mod goal;
pub mod investment;
pub mod report;
pub mod transaction;

pub use alert::handle_alerts_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{WealthError, WealthResult};

/// Parse a date argument, defaulting to today when absent
pub(crate) fn parse_date_or_today(date: Option<&str>) -> WealthResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| WealthError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a money argument
pub(crate) fn parse_amount(s: &str) -> WealthResult<crate::models::Money> {
    crate::models::Money::parse(s).map_err(|e| WealthError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date_or_today(Some("2025-01-15")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        assert!(parse_date_or_today(Some("15/01/2025")).is_err());
        assert!(parse_date_or_today(None).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50").unwrap().cents(), 1050);
        assert!(parse_amount("ten").is_err());
    }
}
