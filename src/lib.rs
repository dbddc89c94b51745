//! wealthtrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the wealthtrack
//! application: recording income and expense transactions, monthly category
//! budgets, savings goals, investments, and a rule-based alert engine that
//! derives warnings from the current records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, investments)
//! - `alerts`: The pure alert-derivation and balance engine
//! - `storage`: Record store with JSON and in-memory backends
//! - `services`: Business logic layer, including the expense admission guard
//! - `events`: Change notification bus
//! - `audit`: Audit logging system
//! - `reports`: Summary and monthly breakdown reports
//! - `display`: Terminal table rendering
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use wealthtrack_cli::config::{paths::WealthPaths, settings::Settings};
//! use wealthtrack_cli::storage::Storage;
//!
//! let paths = WealthPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, settings.backend)?;
//! storage.load_all()?;
//! ```

pub mod alerts;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{WealthError, WealthResult};
