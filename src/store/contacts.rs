//! Contact table
//!
//! An in-memory list of contacts mirrored to `contacts.csv`. Every mutation
//! rewrites the whole file before returning, so the file and the table never
//! disagree after a successful call. IDs come from a counter seeded from the
//! highest ID on disk and are never reused while the file lives.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::csv_file;
use super::error::StoreError;

/// Column order in contacts.csv
pub const HEADER: [&str; 5] = ["ID", "Name", "Email", "Phone", "Notes"];

/// One row of the contact table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: u64,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Notes")]
    pub notes: String,
}

/// The mutable fields of a contact, as supplied by a caller
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl ContactFields {
    fn trimmed(&self) -> ContactFields {
        ContactFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

/// CSV-backed contact table with write-through persistence
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    next_id: u64,
}

impl ContactStore {
    /// Create an empty store bound to a file, without touching disk
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table from disk, replacing the in-memory contents
    ///
    /// An absent file is an empty table, not an error. On failure the table
    /// is left empty and the counter reset, so the store stays usable.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        self.contacts.clear();
        self.next_id = 1;

        if !self.path.exists() {
            return Ok(0);
        }

        let rows = csv_file::read_rows(&self.path, &HEADER)?;
        let mut contacts = Vec::with_capacity(rows.len());
        let mut max_id = 0u64;

        for row in rows {
            let id_field = row.get(0).unwrap_or("");
            let id: u64 = id_field.parse().map_err(|_| StoreError::BadId {
                value: id_field.to_string(),
                path: self.path.clone(),
            })?;
            max_id = max_id.max(id);

            contacts.push(Contact {
                id,
                name: row.get(1).unwrap_or("").to_string(),
                email: row.get(2).unwrap_or("").to_string(),
                phone: row.get(3).unwrap_or("").to_string(),
                notes: row.get(4).unwrap_or("").to_string(),
            });
        }

        let count = contacts.len();
        self.contacts = contacts;
        self.next_id = max_id + 1;
        Ok(count)
    }

    /// Rewrite the backing file from the in-memory table
    pub fn save(&self) -> Result<(), StoreError> {
        csv_file::write_rows(
            &self.path,
            &HEADER,
            self.contacts.iter().map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.email.clone(),
                    c.phone.clone(),
                    c.notes.clone(),
                ]
            }),
        )
    }

    /// Append a new contact and persist
    ///
    /// Fields are trimmed; the assigned ID is returned with the record.
    pub fn add(&mut self, fields: &ContactFields) -> Result<&Contact, StoreError> {
        let fields = fields.trimmed();
        let contact = Contact {
            id: self.next_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            notes: fields.notes,
        };

        self.contacts.push(contact);
        if let Err(e) = self.save() {
            // Keep memory and disk consistent on a failed persist
            self.contacts.pop();
            return Err(e);
        }

        self.next_id += 1;
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// The full table, in insertion order
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts in the table
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Case-insensitive substring search across every field
    ///
    /// An empty or whitespace-only query matches everything. Order is
    /// preserved; nothing is mutated.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.contacts.iter().collect();
        }

        self.contacts
            .iter()
            .filter(|c| {
                c.id.to_string().contains(&query)
                    || c.name.to_lowercase().contains(&query)
                    || c.email.to_lowercase().contains(&query)
                    || c.phone.to_lowercase().contains(&query)
                    || c.notes.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Find a contact by ID
    pub fn get(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Overwrite the mutable fields of an existing contact and persist
    pub fn update(&mut self, id: u64, fields: &ContactFields) -> Result<&Contact, StoreError> {
        let fields = fields.trimmed();
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound { id })?;

        let previous = self.contacts[index].clone();
        let contact = &mut self.contacts[index];
        contact.name = fields.name;
        contact.email = fields.email;
        contact.phone = fields.phone;
        contact.notes = fields.notes;

        if let Err(e) = self.save() {
            self.contacts[index] = previous;
            return Err(e);
        }
        Ok(&self.contacts[index])
    }

    /// Remove every contact with the given ID and persist
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        if !self.contacts.iter().any(|c| c.id == id) {
            return Err(StoreError::NotFound { id });
        }

        let previous = self.contacts.clone();
        self.contacts.retain(|c| c.id != id);
        if let Err(e) = self.save() {
            self.contacts = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Drop every contact, reset the ID counter, and persist the empty table
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        let previous = std::mem::take(&mut self.contacts);
        let previous_next_id = self.next_id;
        self.next_id = 1;

        if let Err(e) = self.save() {
            self.contacts = previous;
            self.next_id = previous_next_id;
            return Err(e);
        }
        Ok(())
    }
}
