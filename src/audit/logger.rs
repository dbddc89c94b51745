//! Audit log writer
//!
//! Appends entries to the audit log in line-delimited JSON (JSONL) format.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::WealthError;

use super::entry::AuditEntry;

/// Writes audit entries to an append-only JSONL file
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    /// Create a logger writing to the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one entry to the log
    pub fn log(&self, entry: &AuditEntry) -> Result<(), WealthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WealthError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| WealthError::Io(format!("Failed to open audit log: {}", e)))?;

        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)
            .map_err(|e| WealthError::Io(format!("Failed to write audit entry: {}", e)))?;

        Ok(())
    }

    /// Read all entries from the log, oldest first
    ///
    /// Lines that fail to parse are skipped so one corrupt line doesn't make
    /// the whole history unreadable.
    pub fn read_all(&self) -> Result<Vec<AuditEntry>, WealthError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)
            .map_err(|e| WealthError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line =
                line.map_err(|e| WealthError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<AuditEntry>(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::EntityType;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_log_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let entity = json!({"category": "Groceries"});
        logger
            .log(&AuditEntry::create(
                EntityType::Budget,
                "bgt-1",
                None,
                &entity,
            ))
            .unwrap();
        logger
            .log(&AuditEntry::delete(
                EntityType::Budget,
                "bgt-1",
                None,
                &entity,
            ))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_id, "bgt-1");
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(path.clone());

        logger
            .log(&AuditEntry::create(
                EntityType::Goal,
                "goal-1",
                None,
                &json!({}),
            ))
            .unwrap();
        std::fs::write(
            &path,
            format!("{}\nnot json\n", std::fs::read_to_string(&path).unwrap()),
        )
        .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
