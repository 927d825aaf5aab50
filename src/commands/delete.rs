//! Delete command - Remove a contact by ID

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;

/// Execute the delete command
pub fn execute(data_dir: &Path, id: u64, yes: bool) -> Result<()> {
    let mut store = utils::open_contacts(data_dir)?;

    let contact = store
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("No record found with ID {id}"))?;
    let name = contact.name.clone();

    if !yes && !utils::confirm(&format!("Delete \"{name}\" (ID {id})?"))? {
        println!("Aborted.");
        return Ok(());
    }

    store.delete(id)?;
    println!("{} {} (ID {})", "Deleted:".green(), name, id);
    Ok(())
}
