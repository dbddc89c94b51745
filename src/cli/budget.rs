//! Budget CLI commands

use clap::Subcommand;

use crate::display::budget_table;
use crate::error::{WealthError, WealthResult};
use crate::models::{BudgetId, Period};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget for a category and month
    Add {
        /// Category the budget limits
        category: String,
        /// Spending limit (e.g. "500")
        limit: String,
        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        period: Option<String>,
    },

    /// List budgets
    List {
        /// Show only one month (YYYY-MM)
        #[arg(long)]
        period: Option<String>,
    },

    /// Change a budget's limit
    Limit {
        /// Budget ID
        id: String,
        /// New spending limit
        amount: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget subcommand
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> WealthResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            period,
        } => {
            let period = parse_period_or_current(period.as_deref())?;
            let budget = service.create(category, parse_amount(&limit)?, period)?;
            println!("Created budget {} ({})", budget, budget.id);
            Ok(())
        }

        BudgetCommands::List { period } => {
            let period = period
                .as_deref()
                .map(|p| {
                    Period::parse(p).map_err(|e| WealthError::Validation(e.to_string()))
                })
                .transpose()?;

            let budgets = service.list(period)?;
            if budgets.is_empty() {
                println!("No budgets found.");
            } else {
                println!("{}", budget_table(&budgets));
            }
            Ok(())
        }

        BudgetCommands::Limit { id, amount } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid budget ID: {}", id)))?;

            let budget = service.set_limit(id, parse_amount(&amount)?)?;
            println!("Updated {}", budget);
            Ok(())
        }

        BudgetCommands::Delete { id } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid budget ID: {}", id)))?;

            let budget = service.delete(id)?;
            println!("Deleted {}", budget);
            Ok(())
        }
    }
}

fn parse_period_or_current(period: Option<&str>) -> WealthResult<Period> {
    match period {
        Some(p) => Period::parse(p).map_err(|e| WealthError::Validation(e.to_string())),
        None => Ok(Period::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_or_current() {
        assert_eq!(
            parse_period_or_current(Some("2025-03")).unwrap(),
            Period::new(2025, 3)
        );
        assert!(parse_period_or_current(Some("2025-13")).is_err());
        assert!(parse_period_or_current(None).is_ok());
    }
}
