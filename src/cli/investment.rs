//! Investment CLI commands

use clap::Subcommand;

use crate::display::investment_table;
use crate::error::{WealthError, WealthResult};
use crate::models::InvestmentId;
use crate::services::InvestmentService;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Record an investment
    Add {
        /// Investment type (e.g. "stocks", "bonds")
        kind: String,
        /// Amount invested
        amount: String,
        /// Expected return rate in percent (e.g. "5.5")
        rate: f64,
        /// Investment date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List investments
    List,

    /// Delete an investment
    Delete {
        /// Investment ID
        id: String,
    },
}

/// Handle an investment subcommand
pub fn handle_investment_command(storage: &Storage, cmd: InvestmentCommands) -> WealthResult<()> {
    let service = InvestmentService::new(storage);

    match cmd {
        InvestmentCommands::Add {
            kind,
            amount,
            rate,
            date,
        } => {
            let investment = service.create(
                kind,
                parse_amount(&amount)?,
                parse_date_or_today(date.as_deref())?,
                rate,
            )?;
            println!("Recorded {} ({})", investment, investment.id);
            Ok(())
        }

        InvestmentCommands::List => {
            let investments = service.list()?;
            if investments.is_empty() {
                println!("No investments found.");
            } else {
                println!("{}", investment_table(&investments));
                let (invested, current) = service.totals()?;
                println!("Total invested: {}  Current value: {}", invested, current);
            }
            Ok(())
        }

        InvestmentCommands::Delete { id } => {
            let id: InvestmentId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid investment ID: {}", id)))?;

            let investment = service.delete(id)?;
            println!("Deleted {}", investment);
            Ok(())
        }
    }
}
