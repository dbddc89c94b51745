//! Transaction service
//!
//! Business logic for transaction management: creation through the expense
//! admission guard, filtering, updates, and the best-effort budget update
//! that follows a committed expense.

use chrono::{NaiveDate, Utc};

use crate::alerts::compute_balance;
use crate::audit::EntityType;
use crate::error::{WealthError, WealthResult};
use crate::models::{Money, Period, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by date range start
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// A committed transaction plus any best-effort follow-up that failed
///
/// The budget update after an expense commit is deliberately not atomic
/// with the insert: if it fails the transaction stays committed and the
/// warning carries what went wrong.
#[derive(Debug)]
pub struct Committed {
    pub transaction: Transaction,
    pub budget_warning: Option<String>,
}

/// An expense draft held back because it would overdraw the balance
///
/// This is a suspend point, not a rejection: exactly one of
/// [`TransactionService::commit_pending`] (proceed) or
/// [`PendingExpense::cancel`] resolves it. Dropping the value unresolved
/// discards the draft with no state change.
#[derive(Debug)]
pub struct PendingExpense {
    draft: Transaction,
    /// Balance the commit would leave behind; always negative here
    pub projected_balance: Money,
}

impl PendingExpense {
    /// The transaction that would be committed on proceed
    pub fn draft(&self) -> &Transaction {
        &self.draft
    }

    /// Discard the draft; no state changes
    pub fn cancel(self) {}
}

/// Outcome of requesting a transaction commit
#[derive(Debug)]
pub enum Admission {
    /// The transaction was committed right away
    Immediate(Committed),
    /// The expense would overdraw the balance; an explicit decision is needed
    Pending(PendingExpense),
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a transaction, gating expenses on the projected balance
    ///
    /// Income commits immediately. An expense is admitted only while the
    /// balance it leaves behind is non-negative; otherwise the draft is
    /// returned as pending and nothing is written.
    pub fn create(&self, input: CreateTransactionInput) -> WealthResult<Admission> {
        let draft = self.build_draft(input)?;

        if draft.is_expense() {
            let current = compute_balance(&self.storage.transactions.get_all()?).balance;
            return self.admit_expense(draft, current);
        }

        Ok(Admission::Immediate(self.commit(draft)?))
    }

    /// The admission guard: decide whether an expense may commit as-is
    ///
    /// Exposed separately so callers holding a balance snapshot (e.g. a
    /// batch import) can gate drafts against it without re-reading the
    /// store.
    pub fn admit_expense(
        &self,
        draft: Transaction,
        current_balance: Money,
    ) -> WealthResult<Admission> {
        let projected_balance = current_balance - draft.amount;

        if projected_balance.is_negative() {
            return Ok(Admission::Pending(PendingExpense {
                draft,
                projected_balance,
            }));
        }

        Ok(Admission::Immediate(self.commit(draft)?))
    }

    /// Resolve a pending expense by committing it as-is
    pub fn commit_pending(&self, pending: PendingExpense) -> WealthResult<Committed> {
        self.commit(pending.draft)
    }

    fn build_draft(&self, input: CreateTransactionInput) -> WealthResult<Transaction> {
        if input.kind == TransactionKind::Expense && !input.amount.is_positive() {
            return Err(WealthError::Validation(
                "Expense amount must be positive".into(),
            ));
        }

        let mut draft = Transaction::new(
            input.kind,
            input.amount,
            input.category.trim().to_string(),
            input.date,
        );

        if let Some(description) = input.description {
            draft.description = description;
        }

        draft
            .validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        Ok(draft)
    }

    /// Write the transaction and run the post-commit budget update
    fn commit(&self, txn: Transaction) -> WealthResult<Committed> {
        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        // Best-effort budget update; the transaction stays committed even
        // if this fails.
        let budget_warning = if txn.is_expense() {
            self.apply_to_budget(&txn).err().map(|e| e.to_string())
        } else {
            None
        };

        Ok(Committed {
            transaction: txn,
            budget_warning,
        })
    }

    /// Increase the spent amount of the budget matching this expense
    ///
    /// No budget for the (category, period) is not an error; the expense
    /// simply has no budget tracking it.
    fn apply_to_budget(&self, txn: &Transaction) -> WealthResult<()> {
        let period = Period::from_date(txn.date);
        let budgets = crate::services::BudgetService::new(self.storage);
        budgets.record_expense(&txn.category, &period, txn.amount)?;
        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> WealthResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> WealthResult<Vec<Transaction>> {
        let mut transactions = if let Some(category) = &filter.category {
            self.storage.transactions.get_by_category(category)?
        } else if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            self.storage.transactions.get_by_date_range(start, end)?
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(start) = filter.start_date {
            transactions.retain(|t| t.date >= start);
        }
        if let Some(end) = filter.end_date {
            transactions.retain(|t| t.date <= end);
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update a transaction
    ///
    /// Does not re-run the admission guard and does not touch budget spent
    /// amounts; those reflect the create-time state only.
    pub fn update(
        &self,
        id: TransactionId,
        amount: Option<Money>,
        category: Option<String>,
        description: Option<String>,
        date: Option<NaiveDate>,
    ) -> WealthResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| WealthError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();

        if let Some(new_amount) = amount {
            txn.amount = new_amount;
        }
        if let Some(new_category) = category {
            txn.category = new_category.trim().to_string();
        }
        if let Some(new_description) = description {
            txn.description = new_description;
        }
        if let Some(new_date) = date {
            txn.date = new_date;
        }
        txn.updated_at = Utc::now();

        txn.validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        let mut changes = Vec::new();
        if before.amount != txn.amount {
            changes.push(format!("amount: {} -> {}", before.amount, txn.amount));
        }
        if before.category != txn.category {
            changes.push(format!(
                "category: '{}' -> '{}'",
                before.category, txn.category
            ));
        }
        if before.date != txn.date {
            changes.push(format!("date: {} -> {}", before.date, txn.date));
        }
        if before.description != txn.description {
            changes.push("description changed".to_string());
        }

        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &before,
            &txn,
            diff,
        )?;

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> WealthResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| WealthError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        Ok(txn)
    }

    /// Count transactions
    pub fn count(&self) -> WealthResult<usize> {
        self.storage.transactions.count()
    }
}
