//! Service layer for wealthtrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the expense admission guard, audit logging, and
//! change-event publication.

pub mod alert;
pub mod budget;
pub mod goal;
pub mod investment;
pub mod transaction;

pub use alert::AlertService;
pub use budget::BudgetService;
pub use goal::{CreateGoalInput, GoalService};
pub use investment::InvestmentService;
pub use transaction::{
    Admission, Committed, CreateTransactionInput, PendingExpense, TransactionFilter,
    TransactionService,
};
