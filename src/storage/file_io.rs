//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Writers
//! go through a temp file in the same directory followed by a rename, so the
//! target is either fully replaced or left untouched.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RosterError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, RosterError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| RosterError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| RosterError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically, pretty-printed with 4-space indentation
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RosterError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .map_err(|e| RosterError::Storage(format!("Failed to serialize data: {}", e)))?;

    write_atomic(path.as_ref(), &buf)
}

/// Read rows from a CSV file, returning an empty list if file doesn't exist
///
/// The first row is treated as a header and mapped to field names.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, RosterError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| RosterError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| {
            RosterError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write rows to a CSV file atomically, with a header row
pub fn write_csv_atomic<T, P>(path: P, rows: &[T]) -> Result<(), RosterError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| RosterError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| RosterError::Storage(format!("Failed to flush CSV data: {}", e)))?;

    write_atomic(path.as_ref(), &buf)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temp file lives in the same directory as the target so the rename
/// stays on one filesystem.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), RosterError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RosterError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| RosterError::Storage(format!("Failed to create temp file: {}", e)))?;

    file.write_all(contents)
        .map_err(|e| RosterError::Storage(format!("Failed to write data: {}", e)))?;

    file.flush()
        .map_err(|e| RosterError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| RosterError::Storage(format!("Failed to sync data: {}", e)))?;

    drop(file);

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        RosterError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
