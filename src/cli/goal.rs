//! Goal CLI commands

use clap::Subcommand;

use crate::display::goal_table;
use crate::error::{WealthError, WealthResult};
use crate::models::{GoalCategory, GoalId};
use crate::services::{CreateGoalInput, GoalService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a financial goal
    Add {
        /// Goal title
        title: String,
        /// Target amount (e.g. "1000")
        target: String,
        /// Target date (YYYY-MM-DD)
        date: String,
        /// Goal category: savings, investment, debt_payment, emergency_fund, other
        #[arg(long, default_value = "savings")]
        category: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// List goals
    List,

    /// Add progress toward a goal (clamped at the target)
    Progress {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

/// Handle a goal subcommand
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> WealthResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            title,
            target,
            date,
            category,
            description,
        } => {
            let category: GoalCategory = category
                .parse()
                .map_err(|e: String| WealthError::Validation(e))?;

            let goal = service.create(CreateGoalInput {
                title,
                target_amount: parse_amount(&target)?,
                target_date: parse_date_or_today(Some(&date))?,
                category,
                description,
            })?;
            println!("Created goal {} ({})", goal, goal.id);
            Ok(())
        }

        GoalCommands::List => {
            let goals = service.list()?;
            if goals.is_empty() {
                println!("No goals found.");
            } else {
                println!("{}", goal_table(&goals));
            }
            Ok(())
        }

        GoalCommands::Progress { id, amount } => {
            let id: GoalId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid goal ID: {}", id)))?;

            let goal = service.add_progress(id, parse_amount(&amount)?)?;
            println!("Updated {}", goal);
            if goal.is_complete() {
                println!("Goal reached!");
            }
            Ok(())
        }

        GoalCommands::Delete { id } => {
            let id: GoalId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid goal ID: {}", id)))?;

            let goal = service.delete(id)?;
            println!("Deleted {}", goal);
            Ok(())
        }
    }
}
