//! Audit logging system for wealthtrack
//!
//! Records all create, update, delete operations with before/after values
//! in an append-only audit log. This is the application's structured log of
//! record: every state change the services perform lands here.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
