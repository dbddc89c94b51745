//! Transaction CLI commands

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::display::transaction_table;
use crate::error::{WealthError, WealthResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::{
    Admission, Committed, CreateTransactionInput, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income transaction
    Income {
        /// Amount (e.g. "1500" or "1500.50")
        amount: String,
        /// Category (e.g. "Salary")
        category: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record an expense transaction
    Expense {
        /// Amount (e.g. "50" or "49.99")
        amount: String,
        /// Category (e.g. "Groceries")
        category: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Commit without asking even if the balance would go negative
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List transactions
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Show only income or only expenses
        #[arg(long)]
        kind: Option<String>,
        /// Maximum number of rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Update a transaction
    Update {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> WealthResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Income {
            amount,
            category,
            description,
            date,
        } => {
            let input = CreateTransactionInput {
                kind: TransactionKind::Income,
                amount: parse_amount(&amount)?,
                category,
                description,
                date: parse_date_or_today(date.as_deref())?,
            };

            match service.create(input)? {
                Admission::Immediate(committed) => print_committed(&committed),
                // Income never goes pending
                Admission::Pending(pending) => pending.cancel(),
            }
            Ok(())
        }

        TransactionCommands::Expense {
            amount,
            category,
            description,
            date,
            yes,
        } => {
            let input = CreateTransactionInput {
                kind: TransactionKind::Expense,
                amount: parse_amount(&amount)?,
                category,
                description,
                date: parse_date_or_today(date.as_deref())?,
            };

            match service.create(input)? {
                Admission::Immediate(committed) => print_committed(&committed),
                Admission::Pending(pending) => {
                    println!(
                        "Warning: this expense of {} would leave your balance at {}.",
                        pending.draft().amount,
                        pending.projected_balance
                    );

                    if yes || confirm("Proceed anyway?")? {
                        let committed = service.commit_pending(pending)?;
                        print_committed(&committed);
                    } else {
                        pending.cancel();
                        println!("Transaction cancelled; nothing was recorded.");
                    }
                }
            }
            Ok(())
        }

        TransactionCommands::List {
            category,
            kind,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(filter)?;
            if transactions.is_empty() {
                println!("No transactions found.");
            } else {
                println!("{}", transaction_table(&transactions));
            }
            Ok(())
        }

        TransactionCommands::Update {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid transaction ID: {}", id)))?;

            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let date = date
                .as_deref()
                .map(|d| parse_date_or_today(Some(d)))
                .transpose()?;

            let txn = service.update(id, amount, category, description, date)?;
            println!("Updated {}", txn);
            Ok(())
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid transaction ID: {}", id)))?;

            let txn = service.delete(id)?;
            println!("Deleted {}", txn);
            Ok(())
        }
    }
}

fn print_committed(committed: &Committed) {
    println!("Recorded {}", committed.transaction);
    if let Some(warning) = &committed.budget_warning {
        eprintln!("Warning: budget update failed: {}", warning);
    }
}

fn parse_kind(s: &str) -> WealthResult<TransactionKind> {
    match s.to_ascii_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(WealthError::Validation(format!(
            "Unknown transaction kind: {}",
            other
        ))),
    }
}

/// Ask a yes/no question on stdin; defaults to no
fn confirm(prompt: &str) -> WealthResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| WealthError::Io(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| WealthError::Io(e.to_string()))?;

    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
