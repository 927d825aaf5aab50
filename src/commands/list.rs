//! List command - Show contacts as a table

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use super::utils;
use crate::store::Contact;

/// Options for the list command
pub struct ListOptions {
    /// Substring filter matched against every field
    pub filter: Option<String>,
    /// Limit number of results
    pub limit: Option<usize>,
}

/// Execute the list command and return formatted output
pub fn execute(data_dir: &Path, options: ListOptions) -> Result<String> {
    let store = utils::open_contacts(data_dir)?;

    let matches: Vec<&Contact> = match options.filter.as_deref() {
        Some(query) => store.search(query),
        None => store.all().iter().collect(),
    };

    let total_count = matches.len();
    let shown: Vec<&Contact> = match options.limit {
        Some(n) => matches.into_iter().take(n).collect(),
        None => matches,
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Name"),
        Cell::new("Email"),
        Cell::new("Phone"),
        Cell::new("Notes"),
    ]);

    for contact in &shown {
        table.add_row(vec![
            Cell::new(contact.id),
            Cell::new(&contact.name),
            Cell::new(&contact.email),
            Cell::new(&contact.phone),
            Cell::new(&contact.notes),
        ]);
    }

    let mut output = table.to_string();
    if shown.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} contact(s)",
            shown.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} contact(s)", total_count));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContactFields, ContactStore};
    use tempfile::tempdir;

    fn seed(data_dir: &Path) {
        let mut store = ContactStore::new(crate::config::contacts_path(data_dir));
        for name in ["Alice", "Bob", "Carol"] {
            store
                .add(&ContactFields {
                    name: name.to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
    }

    #[test]
    fn test_list_shows_all() {
        let tmp = tempdir().unwrap();
        seed(tmp.path());

        let output = execute(
            tmp.path(),
            ListOptions {
                filter: None,
                limit: None,
            },
        )
        .unwrap();
        assert!(output.contains("Alice"));
        assert!(output.contains("Carol"));
        assert!(output.ends_with("3 contact(s)"));
    }

    #[test]
    fn test_list_filter_and_limit() {
        let tmp = tempdir().unwrap();
        seed(tmp.path());

        let filtered = execute(
            tmp.path(),
            ListOptions {
                filter: Some("bob".to_string()),
                limit: None,
            },
        )
        .unwrap();
        assert!(filtered.contains("Bob"));
        assert!(!filtered.contains("Carol"));

        let limited = execute(
            tmp.path(),
            ListOptions {
                filter: None,
                limit: Some(1),
            },
        )
        .unwrap();
        assert!(limited.contains("Showing 1 of 3 contact(s)"));
    }
}
