//! User settings for wealthtrack
//!
//! Manages user preferences: currency symbol, the low-balance alert
//! threshold, the storage backend, and the date format.

use serde::{Deserialize, Serialize};

use super::paths::WealthPaths;
use crate::error::WealthError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Which document store backs the repositories
///
/// Selected once at startup; nothing downstream branches on it per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JSON files under the data directory (default)
    #[default]
    Json,
    /// Ephemeral in-memory store; nothing survives the process
    Memory,
}

/// User settings for wealthtrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Balance below this (in cents) raises the low-balance alert
    #[serde(default = "default_low_balance_threshold")]
    pub low_balance_threshold: Money,

    /// Storage backend selected at startup
    #[serde(default)]
    pub backend: BackendKind,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Kz".to_string()
}

fn default_low_balance_threshold() -> Money {
    Money::from_units(1000)
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            low_balance_threshold: default_low_balance_threshold(),
            backend: BackendKind::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &WealthPaths) -> Result<Self, WealthError> {
        let path = paths.settings_file();

        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &WealthPaths) -> Result<(), WealthError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
