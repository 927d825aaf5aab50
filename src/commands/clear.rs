//! Clear command - Wipe the whole contact table

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;

/// Execute the clear command
pub fn execute(data_dir: &Path, yes: bool) -> Result<()> {
    let mut store = utils::open_contacts(data_dir)?;

    if store.is_empty() {
        println!("No contacts to clear.");
        return Ok(());
    }

    let count = store.len();
    if !yes && !utils::confirm(&format!("Delete all {count} contact(s)?"))? {
        println!("Aborted.");
        return Ok(());
    }

    store.clear_all()?;
    println!("{} {} contact(s). ID counter reset.", "Cleared:".green(), count);
    Ok(())
}
