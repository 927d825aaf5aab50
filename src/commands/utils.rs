//! Shared utilities for commands

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::store::ContactStore;

/// Open the contact store for a data directory and load what is on disk
///
/// Unlike the GUI facade, the CLI wants a broken file surfaced as an error
/// instead of silently showing an empty table.
pub fn open_contacts(data_dir: &Path) -> Result<ContactStore> {
    let mut store = ContactStore::new(crate::config::contacts_path(data_dir));
    store
        .load()
        .with_context(|| format!("Failed to load contacts from: {}", store.path().display()))?;
    Ok(store)
}

/// Ask a y/N question on stdin
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} (y/N) ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
