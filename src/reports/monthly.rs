//! Month-by-month breakdown report
//!
//! Income and expense totals per calendar month over a span of periods.

use std::io::Write;

use crate::alerts::compute_balance;
use crate::error::WealthResult;
use crate::models::{Money, Period};
use crate::storage::Storage;

/// One month's totals
#[derive(Debug, Clone)]
pub struct MonthlyRow {
    pub period: Period,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

/// Per-month income/expense breakdown
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyReport {
    /// Generate a breakdown covering `from` through `to` inclusive
    pub fn generate(storage: &Storage, from: Period, to: Period) -> WealthResult<Self> {
        let mut rows = Vec::new();
        let mut period = from;

        while period <= to {
            let transactions = storage
                .transactions
                .get_by_date_range(period.start_date(), period.end_date())?;
            let summary = compute_balance(&transactions);

            rows.push(MonthlyRow {
                period,
                income: summary.income,
                expenses: summary.expenses,
                net: summary.balance,
            });

            period = period.next();
        }

        Ok(Self { rows })
    }

    /// Generate a breakdown for the `months` most recent periods ending at
    /// `until`
    pub fn last_months(storage: &Storage, until: Period, months: u32) -> WealthResult<Self> {
        let mut from = until;
        for _ in 1..months.max(1) {
            from = from.prev();
        }
        Self::generate(storage, from, until)
    }

    /// Render the report as text
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Monthly Breakdown")?;
        writeln!(out, "=================")?;

        for row in &self.rows {
            writeln!(
                out,
                "{}: income {}, expenses {}, net {}",
                row.period, row.income, row.expenses, row.net
            )?;
        }

        Ok(())
    }
}
