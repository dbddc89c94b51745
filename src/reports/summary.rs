//! Financial summary report
//!
//! Totals for an optional date range and category filter: the numbers the
//! report export is built from.

use std::io::Write;

use chrono::NaiveDate;

use crate::alerts::compute_balance;
use crate::error::WealthResult;
use crate::models::{Money, Transaction};
use crate::storage::Storage;

/// Income/expense totals over a filtered transaction set
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Start of the reported range, if bounded
    pub start_date: Option<NaiveDate>,
    /// End of the reported range, if bounded
    pub end_date: Option<NaiveDate>,
    /// Category filter applied, if any
    pub category: Option<String>,
    /// Total income
    pub total_income: Money,
    /// Total expenses
    pub total_expenses: Money,
    /// Net balance (income − expenses)
    pub net_balance: Money,
    /// The transactions behind the totals, newest first
    pub transactions: Vec<Transaction>,
}

impl SummaryReport {
    /// Generate a summary over the optionally filtered transactions
    pub fn generate(
        storage: &Storage,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        category: Option<String>,
    ) -> WealthResult<Self> {
        let mut transactions = storage.transactions.get_all()?;

        if let Some(start) = start_date {
            transactions.retain(|t| t.date >= start);
        }
        if let Some(end) = end_date {
            transactions.retain(|t| t.date <= end);
        }
        if let Some(cat) = &category {
            transactions.retain(|t| t.category == *cat);
        }

        let summary = compute_balance(&transactions);

        Ok(Self {
            start_date,
            end_date,
            category,
            total_income: summary.income,
            total_expenses: summary.expenses,
            net_balance: summary.balance,
            transactions,
        })
    }

    /// Render the report as text
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Financial Summary")?;
        writeln!(out, "=================")?;

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => writeln!(out, "Period: {} to {}", start, end)?,
            (Some(start), None) => writeln!(out, "Period: from {}", start)?,
            (None, Some(end)) => writeln!(out, "Period: until {}", end)?,
            (None, None) => writeln!(out, "Period: all time")?,
        }

        if let Some(category) = &self.category {
            writeln!(out, "Category: {}", category)?;
        }

        writeln!(out)?;
        writeln!(out, "Total income:   {}", self.total_income)?;
        writeln!(out, "Total expenses: {}", self.total_expenses)?;
        writeln!(out, "Net balance:    {}", self.net_balance)?;
        writeln!(out)?;
        writeln!(out, "Transactions: {}", self.transactions.len())?;

        Ok(())
    }
}
