//! Data file locations
//!
//! All tables live as CSV files in a single data directory, `data/` relative
//! to the working directory unless the caller overrides it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Contacts table file name
pub const CONTACTS_FILE: &str = "contacts.csv";

/// Teams table file name
pub const TEAMS_FILE: &str = "teams.csv";

/// Matchups table file name
pub const MATCHUPS_FILE: &str = "matchups.csv";

/// Get the contacts CSV path inside a data directory
pub fn contacts_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
    data_dir.as_ref().join(CONTACTS_FILE)
}

/// Get the teams CSV path inside a data directory
pub fn teams_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
    data_dir.as_ref().join(TEAMS_FILE)
}

/// Get the matchups CSV path inside a data directory
pub fn matchups_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
    data_dir.as_ref().join(MATCHUPS_FILE)
}

/// Create the data directory if it does not exist yet
pub fn ensure_data_dir<P: AsRef<Path>>(data_dir: P) -> Result<()> {
    let data_dir = data_dir.as_ref();
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_paths() {
        assert_eq!(contacts_path("data"), PathBuf::from("data/contacts.csv"));
        assert_eq!(teams_path("data"), PathBuf::from("data/teams.csv"));
        assert_eq!(matchups_path("data"), PathBuf::from("data/matchups.csv"));
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        ensure_data_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call on an existing directory is fine
        ensure_data_dir(&dir).unwrap();
    }
}
