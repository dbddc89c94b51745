//! Reports module for wealthtrack
//!
//! Assembles the financial summary and month-by-month breakdowns from the
//! record store and renders them as text.

pub mod monthly;
pub mod summary;

pub use monthly::{MonthlyReport, MonthlyRow};
pub use summary::SummaryReport;
