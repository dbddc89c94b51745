//! Storage layer for wealthtrack
//!
//! The record store: per-entity repositories over a document backend chosen
//! once at startup, plus the audit logger and the change-notification bus
//! that every mutation flows through.

pub mod backend;
pub mod budgets;
pub mod file_io;
pub mod goals;
pub mod investments;
pub mod transactions;

pub use backend::DocumentBackend;
pub use budgets::BudgetRepository;
pub use goals::GoalRepository;
pub use investments::InvestmentRepository;
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BackendKind, WealthPaths};
use crate::error::WealthError;
use crate::events::{ChangeBus, ChangeEvent, ChangeKind, EntityKind};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: WealthPaths,
    audit: AuditLogger,
    pub events: ChangeBus,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
    pub investments: InvestmentRepository,
}

impl Storage {
    /// Create a new Storage instance with the given backend
    pub fn new(paths: WealthPaths, backend: BackendKind) -> Result<Self, WealthError> {
        if backend == BackendKind::Json {
            paths.ensure_directories()?;
        }

        let document = |path| match backend {
            BackendKind::Json => DocumentBackend::json(path),
            BackendKind::Memory => DocumentBackend::memory(),
        };

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            events: ChangeBus::new(),
            transactions: TransactionRepository::new(document(paths.transactions_file())),
            budgets: BudgetRepository::new(document(paths.budgets_file())),
            goals: GoalRepository::new(document(paths.goals_file())),
            investments: InvestmentRepository::new(document(paths.investments_file())),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &WealthPaths {
        &self.paths
    }

    /// Load all data from the backend
    pub fn load_all(&self) -> Result<(), WealthError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        self.investments.load()?;
        Ok(())
    }

    /// Save all data to the backend
    pub fn save_all(&self) -> Result<(), WealthError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        self.investments.save()?;
        Ok(())
    }

    /// Log a create operation and publish the matching change event
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WealthError> {
        self.audit.log(&AuditEntry::create(
            entity_type,
            entity_id.clone(),
            entity_name,
            entity,
        ))?;
        self.events.publish(ChangeEvent::new(
            entity_kind(entity_type),
            ChangeKind::Created,
            entity_id,
        ));
        Ok(())
    }

    /// Log an update operation and publish the matching change event
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), WealthError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id.clone(),
            entity_name,
            before,
            after,
            diff_summary,
        ))?;
        self.events.publish(ChangeEvent::new(
            entity_kind(entity_type),
            ChangeKind::Updated,
            entity_id,
        ));
        Ok(())
    }

    /// Log a delete operation and publish the matching change event
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WealthError> {
        self.audit.log(&AuditEntry::delete(
            entity_type,
            entity_id.clone(),
            entity_name,
            entity,
        ))?;
        self.events.publish(ChangeEvent::new(
            entity_kind(entity_type),
            ChangeKind::Deleted,
            entity_id,
        ));
        Ok(())
    }

    /// Read the full audit history
    pub fn audit_history(&self) -> Result<Vec<AuditEntry>, WealthError> {
        self.audit.read_all()
    }
}

fn entity_kind(entity_type: EntityType) -> EntityKind {
    match entity_type {
        EntityType::Transaction => EntityKind::Transaction,
        EntityType::Budget => EntityKind::Budget,
        EntityType::Goal => EntityKind::Goal,
        EntityType::Investment => EntityKind::Investment,
    }
}
