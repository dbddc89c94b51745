//! Document store backends
//!
//! Each repository persists one JSON document. The backend for all documents
//! is negotiated once at startup from the settings: JSON files on disk, or
//! an in-memory store for ephemeral runs and tests. Repositories never
//! branch on the backend per call; they just load and save documents.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use super::file_io::{read_json, write_json_atomic};
use crate::error::{WealthError, WealthResult};

/// Storage for a single JSON document
pub enum DocumentBackend {
    /// A JSON file on disk, written atomically
    Json(PathBuf),
    /// An in-memory document; contents die with the process
    Memory(Mutex<Option<serde_json::Value>>),
}

impl DocumentBackend {
    /// A file-backed document
    pub fn json(path: PathBuf) -> Self {
        Self::Json(path)
    }

    /// An empty in-memory document
    pub fn memory() -> Self {
        Self::Memory(Mutex::new(None))
    }

    /// Load the document, or its default when nothing has been stored yet
    pub fn load<T>(&self) -> WealthResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self {
            Self::Json(path) => read_json(path),
            Self::Memory(cell) => {
                let guard = cell
                    .lock()
                    .map_err(|e| WealthError::Storage(format!("Memory store poisoned: {}", e)))?;
                match guard.as_ref() {
                    Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                        WealthError::Storage(format!("Failed to decode memory store: {}", e))
                    }),
                    None => Ok(T::default()),
                }
            }
        }
    }

    /// Persist the document
    pub fn save<T>(&self, data: &T) -> WealthResult<()>
    where
        T: Serialize,
    {
        match self {
            Self::Json(path) => write_json_atomic(path, data),
            Self::Memory(cell) => {
                let value = serde_json::to_value(data).map_err(|e| {
                    WealthError::Storage(format!("Failed to encode memory store: {}", e))
                })?;
                let mut guard = cell
                    .lock()
                    .map_err(|e| WealthError::Storage(format!("Memory store poisoned: {}", e)))?;
                *guard = Some(value);
                Ok(())
            }
        }
    }
}
