//! Report CLI commands

use clap::Subcommand;

use crate::error::{WealthError, WealthResult};
use crate::models::Period;
use crate::reports::{MonthlyReport, SummaryReport};
use crate::storage::Storage;

use super::parse_date_or_today;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income/expense totals, optionally filtered
    Summary {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Month-by-month income/expense breakdown
    Monthly {
        /// How many months to cover, ending at the current one
        #[arg(long, default_value_t = 6)]
        months: u32,
    },
}

/// Handle a report subcommand
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> WealthResult<()> {
    match cmd {
        ReportCommands::Summary { from, to, category } => {
            let start = from
                .as_deref()
                .map(|d| parse_date_or_today(Some(d)))
                .transpose()?;
            let end = to
                .as_deref()
                .map(|d| parse_date_or_today(Some(d)))
                .transpose()?;

            let report = SummaryReport::generate(storage, start, end, category)?;
            let mut stdout = std::io::stdout();
            report
                .render(&mut stdout)
                .map_err(|e| WealthError::Io(e.to_string()))?;
            Ok(())
        }

        ReportCommands::Monthly { months } => {
            let report = MonthlyReport::last_months(storage, Period::current(), months)?;
            let mut stdout = std::io::stdout();
            report
                .render(&mut stdout)
                .map_err(|e| WealthError::Io(e.to_string()))?;
            Ok(())
        }
    }
}
