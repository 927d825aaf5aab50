//! Scoped CSV file access
//!
//! Each call opens the file, does its work, and releases the handle; no
//! handle outlives a read or write. Writers always rewrite the whole file,
//! header first, so the file mirrors the in-memory table exactly.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::Path;

use super::error::StoreError;

/// Read all data rows from a CSV file, verifying the header row
///
/// The file must exist; callers treat an absent file as an empty table
/// before getting here.
pub fn read_rows(path: &Path, header: &[&str]) -> Result<Vec<StringRecord>, StoreError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let found = reader.headers()?;
    if found.iter().ne(header.iter().copied()) {
        return Err(StoreError::Header {
            path: path.to_path_buf(),
            expected: header.iter().map(|s| s.to_string()).collect(),
            found: found.iter().map(|s| s.to_string()).collect(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Rewrite a CSV file with the given header and rows
///
/// Creates the containing directory if absent. The temporary writer buffers
/// in memory; the file only changes once every row has serialized cleanly.
pub fn write_rows<I, R>(path: &Path, header: &[&str], rows: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| StoreError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;
    fs::write(path, buf)?;
    Ok(())
}
