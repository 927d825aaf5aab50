//! Update command - Overwrite fields of an existing contact

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use crate::store::ContactFields;

/// New field values; `None` keeps the current value
#[derive(Debug, Default)]
pub struct UpdateFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Execute the update command
pub fn execute(data_dir: &Path, id: u64, new: UpdateFields) -> Result<()> {
    let mut store = utils::open_contacts(data_dir)?;

    let current = store
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("No record found with ID {id}"))?;

    // Merge: omitted flags keep what the record already has
    let fields = ContactFields {
        name: new.name.unwrap_or_else(|| current.name.clone()),
        email: new.email.unwrap_or_else(|| current.email.clone()),
        phone: new.phone.unwrap_or_else(|| current.phone.clone()),
        notes: new.notes.unwrap_or_else(|| current.notes.clone()),
    };

    let contact = store.update(id, &fields)?;
    println!("{} {} (ID {})", "Updated:".green(), contact.name, contact.id);
    Ok(())
}
