//! Export module for wealthtrack
//!
//! Writes transaction data to CSV, JSON, or YAML files.

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use crate::error::WealthResult;
use crate::models::Transaction;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// Export transactions in the chosen format
pub fn export_transactions<P: AsRef<Path>>(
    format: ExportFormat,
    transactions: &[Transaction],
    path: P,
) -> WealthResult<()> {
    match format {
        ExportFormat::Csv => csv::export_transactions(transactions, path),
        ExportFormat::Json => json::export_transactions(transactions, path),
        ExportFormat::Yaml => yaml::export_transactions(transactions, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
