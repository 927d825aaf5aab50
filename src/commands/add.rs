//! Add command - Append a new contact

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use crate::store::ContactFields;

/// Execute the add command
pub fn execute(data_dir: &Path, name: &str, email: &str, phone: &str, notes: &str) -> Result<()> {
    let mut store = utils::open_contacts(data_dir)?;

    let fields = ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        notes: notes.to_string(),
    };
    let contact = store.add(&fields)?;

    println!(
        "{} {} (ID {})",
        "Added:".green(),
        contact.name,
        contact.id
    );
    Ok(())
}
