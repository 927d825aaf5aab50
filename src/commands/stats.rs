//! Stats command - Show what lives in the data directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use super::utils;
use crate::config;
use crate::store::TeamBoard;

/// Snapshot of one CSV file
#[derive(Debug)]
pub struct FileStats {
    /// File path
    pub path: PathBuf,

    /// Number of data rows (excluding the header)
    pub records: usize,

    /// File size in bytes, 0 when absent
    pub size_bytes: u64,

    /// Last modified time, None when absent
    pub modified: Option<std::time::SystemTime>,
}

/// Statistics over the whole data directory
#[derive(Debug)]
pub struct Stats {
    pub data_dir: PathBuf,
    pub contacts: FileStats,
    pub teams: FileStats,
    pub matchups: FileStats,
}

fn file_stats(path: PathBuf, records: usize) -> FileStats {
    let (size_bytes, modified) = match fs::metadata(&path) {
        Ok(meta) => (meta.len(), meta.modified().ok()),
        Err(_) => (0, None),
    };
    FileStats {
        path,
        records,
        size_bytes,
        modified,
    }
}

/// Gather statistics for a data directory
pub fn stats(data_dir: &Path) -> Result<Stats> {
    let contacts = utils::open_contacts(data_dir)?;

    let mut board = TeamBoard::new(config::teams_path(data_dir), config::matchups_path(data_dir));
    board.load()?;

    Ok(Stats {
        data_dir: data_dir.to_path_buf(),
        contacts: file_stats(config::contacts_path(data_dir), contacts.len()),
        teams: file_stats(config::teams_path(data_dir), board.teams().len()),
        matchups: file_stats(config::matchups_path(data_dir), board.matchups().len()),
    })
}

/// Format stats for display
pub fn format_stats(stats: &Stats) -> String {
    let mut lines = vec![format!("Data directory: {}", stats.data_dir.display())];
    lines.push(String::new());

    for file in [&stats.contacts, &stats.teams, &stats.matchups] {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if file.modified.is_none() && file.size_bytes == 0 {
            lines.push(format!("{name}: (not created yet)"));
            continue;
        }

        let modified = file
            .modified
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| {
                let dt = chrono::DateTime::from_timestamp(d.as_secs() as i64, 0).unwrap_or_default();
                dt.format("%Y-%m-%d %H:%M").to_string()
            })
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "{name}: {} record(s), {}, modified {modified}",
            file.records,
            utils::format_size(file.size_bytes)
        ));
    }

    lines.join("\n")
}

/// Execute the stats command
pub fn execute(data_dir: &Path) -> Result<()> {
    let stats = stats(data_dir)?;
    println!("{}", format_stats(&stats));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContactFields, ContactStore};
    use tempfile::tempdir;

    #[test]
    fn test_stats_on_empty_dir() {
        let tmp = tempdir().unwrap();
        let stats = stats(tmp.path()).unwrap();
        assert_eq!(stats.contacts.records, 0);
        assert_eq!(stats.contacts.size_bytes, 0);

        let output = format_stats(&stats);
        assert!(output.contains("contacts.csv: (not created yet)"));
    }

    #[test]
    fn test_stats_counts_records() {
        let tmp = tempdir().unwrap();
        let mut store = ContactStore::new(config::contacts_path(tmp.path()));
        store
            .add(&ContactFields {
                name: "Alice".to_string(),
                ..Default::default()
            })
            .unwrap();

        let stats = stats(tmp.path()).unwrap();
        assert_eq!(stats.contacts.records, 1);
        assert!(stats.contacts.size_bytes > 0);

        let output = format_stats(&stats);
        assert!(output.contains("contacts.csv: 1 record(s)"));
    }
}
