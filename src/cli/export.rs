//! Export CLI command

use std::path::PathBuf;

use clap::Args;

use crate::error::{WealthError, WealthResult};
use crate::export::{export_transactions, ExportFormat};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

#[derive(Args)]
pub struct ExportArgs {
    /// Output format: csv, json, or yaml
    pub format: String,

    /// Output file path
    pub output: PathBuf,

    /// Export only one category
    #[arg(long)]
    pub category: Option<String>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> WealthResult<()> {
    let format: ExportFormat = args
        .format
        .parse()
        .map_err(|e: String| WealthError::Validation(e))?;

    let service = TransactionService::new(storage);
    let mut filter = TransactionFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }

    let transactions = service.list(filter)?;
    export_transactions(format, &transactions, &args.output)?;

    println!(
        "Exported {} transactions to {}",
        transactions.len(),
        args.output.display()
    );
    Ok(())
}
