use anyhow::Result;
use clap::{Parser, Subcommand};

use wealthtrack_cli::cli::{
    handle_alerts_command, handle_budget_command, handle_export_command, handle_goal_command,
    handle_investment_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ExportArgs, GoalCommands, InvestmentCommands, ReportCommands, TransactionCommands,
};
use wealthtrack_cli::config::{paths::WealthPaths, settings::Settings};
use wealthtrack_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "wealthtrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "wealthtrack records income and expense transactions, tracks monthly \
                  category budgets, savings goals and investments, and derives \
                  rule-based alerts from your current financial records."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Investment management commands
    #[command(subcommand, alias = "inv")]
    Investment(InvestmentCommands),

    /// Show current alerts and the balance summary
    Alerts,

    /// Reporting commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export transactions to a file
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WealthPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths, settings.backend)?;
    storage.load_all()?;

    match cli.command {
        Commands::Transaction(cmd) => handle_transaction_command(&storage, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&storage, cmd)?,
        Commands::Investment(cmd) => handle_investment_command(&storage, cmd)?,
        Commands::Alerts => handle_alerts_command(&storage, &settings)?,
        Commands::Report(cmd) => handle_report_command(&storage, cmd)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Audit { limit } => {
            let entries = storage.audit_history()?;
            let start = entries.len().saturating_sub(limit);
            for entry in &entries[start..] {
                println!(
                    "{} {} {} {}{}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.operation,
                    entry.entity_type,
                    entry.entity_id,
                    entry
                        .diff_summary
                        .as_deref()
                        .map(|d| format!(" ({})", d))
                        .unwrap_or_default()
                );
            }
        }
        Commands::Config => {
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Data directory: {}", storage.paths().data_dir().display());
            println!("Audit log:      {}", storage.paths().audit_log().display());
            println!("Backend:        {:?}", settings.backend);
            println!("Currency:       {}", settings.currency_symbol);
            println!(
                "Low balance threshold: {}",
                settings.low_balance_threshold
            );
        }
    }

    Ok(())
}
