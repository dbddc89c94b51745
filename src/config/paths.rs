//! Path management for wealthtrack
//!
//! Resolves the data directory for configuration, records, and the audit
//! log.
//!
//! ## Path Resolution Order
//!
//! 1. `WEALTHTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (e.g. `~/.config/wealthtrack` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WealthError;

/// Manages all paths used by wealthtrack
#[derive(Debug, Clone)]
pub struct WealthPaths {
    /// Base directory for all wealthtrack data
    base_dir: PathBuf,
}

impl WealthPaths {
    /// Create a new WealthPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is unset.
    pub fn new() -> Result<Self, WealthError> {
        let base_dir = if let Ok(custom) = std::env::var("WEALTHTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "wealthtrack")
                .ok_or_else(|| {
                    WealthError::Config("Could not determine a config directory".into())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create WealthPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the record files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to goals.json
    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Get the path to investments.json
    pub fn investments_file(&self) -> PathBuf {
        self.data_dir().join("investments.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WealthError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WealthError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WealthError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if wealthtrack has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
