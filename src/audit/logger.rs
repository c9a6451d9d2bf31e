//! File-backed event log
//!
//! Writes one line per event, formatted as `<timestamp>: <message>`. The
//! file is opened in append mode for each write and flushed before the call
//! returns, so no handle outlives the operation that logged the event. The
//! log is never rotated or truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::{RosterError, RosterResult};

use super::EventSink;

/// Append-only event log backed by a text file
pub struct EventLog {
    /// Path to the log file
    log_path: PathBuf,
}

impl EventLog {
    /// Create a new EventLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Read all log lines (oldest first)
    pub fn read_all(&self) -> RosterResult<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| RosterError::Io(format!("Failed to open event log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                RosterError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;
            lines.push(line);
        }

        Ok(lines)
    }

    /// Number of lines in the log
    pub fn entry_count(&self) -> RosterResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

impl EventSink for EventLog {
    /// Append one event line
    ///
    /// Each write opens, writes, and flushes the file before returning.
    fn append(&self, message: &str) -> RosterResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RosterError::Io(format!("Failed to open event log: {}", e)))?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        writeln!(file, "{}: {}", timestamp, message)
            .map_err(|e| RosterError::Io(format!("Failed to write event: {}", e)))?;

        file.flush()
            .map_err(|e| RosterError::Io(format!("Failed to flush event log: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_log() -> (EventLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("log.txt");
        (EventLog::new(log_path), temp_dir)
    }

    #[test]
    fn test_append_and_read() {
        let (log, _temp) = create_test_log();

        log.append("User 'Ana' registered.").unwrap();

        let lines = log.read_all().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(": User 'Ana' registered."));
    }

    #[test]
    fn test_lines_are_timestamped() {
        let (log, _temp) = create_test_log();

        log.append("something happened").unwrap();

        let lines = log.read_all().unwrap();
        // `<timestamp>: <message>` with a date-shaped prefix
        let (prefix, message) = lines[0].split_once(": ").unwrap();
        assert_eq!(message, "something happened");
        assert!(prefix.starts_with(char::is_numeric));
        assert!(prefix.contains('-'));
    }

    #[test]
    fn test_appends_accumulate() {
        let (log, _temp) = create_test_log();

        for i in 0..5 {
            log.append(&format!("event {}", i)).unwrap();
        }

        assert_eq!(log.entry_count().unwrap(), 5);

        let lines = log.read_all().unwrap();
        assert!(lines[0].ends_with("event 0"));
        assert!(lines[4].ends_with("event 4"));
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (log, _temp) = create_test_log();
        assert!(!log.exists());
        assert!(log.read_all().unwrap().is_empty());
        assert_eq!(log.entry_count().unwrap(), 0);
    }
}
