//! GUI bridge facade
//!
//! The surface an embedding shell (webview window, HTML front end) calls
//! into. Every method returns an [`ApiResponse`] ready to marshal as JSON;
//! store errors never escape as `Err`, they become `success: false` plus a
//! readable message.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config;
use crate::store::{Contact, ContactFields, ContactStore, Matchup, TeamBoard, TeamMember};

/// Result object returned by every bridge call
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            count: None,
        }
    }

    fn ok_with(message: impl Into<String>, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::ok(message)
        }
    }

    fn ok_listing(message: impl Into<String>, data: T, count: usize) -> Self {
        Self {
            data: Some(data),
            count: Some(count),
            ..Self::ok(message)
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            count: None,
        }
    }
}

/// What `save_teams` receives and `load_teams` hands back
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamBoardData {
    pub teams: Vec<TeamMember>,
    pub matchups: Vec<Matchup>,
}

/// The API object handed to the GUI shell
#[derive(Debug)]
pub struct Api {
    contacts: ContactStore,
    board: TeamBoard,
}

impl Api {
    /// Open both stores under a data directory and load what is on disk
    ///
    /// A failed load degrades to an empty table so the shell can still
    /// start; the next successful save rewrites the file.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        // A failed mkdir surfaces on the first save instead
        let _ = config::ensure_data_dir(data_dir);

        let mut contacts = ContactStore::new(config::contacts_path(data_dir));
        let _ = contacts.load();

        let mut board = TeamBoard::new(
            config::teams_path(data_dir),
            config::matchups_path(data_dir),
        );
        let _ = board.load();

        Self { contacts, board }
    }

    /// Add a contact; fields are trimmed and the new ID assigned by the store
    pub fn add_record(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        notes: &str,
    ) -> ApiResponse<Contact> {
        let fields = ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: notes.to_string(),
        };

        match self.contacts.add(&fields) {
            Ok(contact) => ApiResponse::ok_with("Contact added successfully", contact.clone()),
            Err(e) => ApiResponse::err(format!("Error adding contact: {e}")),
        }
    }

    /// The full contact table with its count
    pub fn get_all_records(&self) -> ApiResponse<Vec<Contact>> {
        let records = self.contacts.all().to_vec();
        let count = records.len();
        ApiResponse::ok_listing("Contacts loaded successfully", records, count)
    }

    /// Case-insensitive substring search; an empty query returns everything
    pub fn search_records(&self, query: &str) -> ApiResponse<Vec<Contact>> {
        let records: Vec<Contact> = self.contacts.search(query).into_iter().cloned().collect();
        let count = records.len();
        let message = if query.trim().is_empty() {
            "Showing all contacts".to_string()
        } else {
            format!("Found {count} result(s) for \"{}\"", query.trim())
        };
        ApiResponse::ok_listing(message, records, count)
    }

    /// Overwrite an existing contact's fields
    pub fn update_record(
        &mut self,
        id: u64,
        name: &str,
        email: &str,
        phone: &str,
        notes: &str,
    ) -> ApiResponse<Contact> {
        let fields = ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: notes.to_string(),
        };

        match self.contacts.update(id, &fields) {
            Ok(contact) => ApiResponse::ok_with("Contact updated successfully", contact.clone()),
            Err(e) if e.is_not_found() => ApiResponse::err(e.to_string()),
            Err(e) => ApiResponse::err(format!("Error updating contact: {e}")),
        }
    }

    /// Delete a contact by ID
    pub fn delete_record(&mut self, id: u64) -> ApiResponse<()> {
        match self.contacts.delete(id) {
            Ok(()) => ApiResponse::ok("Contact deleted successfully"),
            Err(e) if e.is_not_found() => ApiResponse::err(e.to_string()),
            Err(e) => ApiResponse::err(format!("Error deleting contact: {e}")),
        }
    }

    /// Drop every contact and reset the ID counter
    pub fn clear_all_data(&mut self) -> ApiResponse<()> {
        match self.contacts.clear_all() {
            Ok(()) => ApiResponse::ok("All contacts cleared"),
            Err(e) => ApiResponse::err(format!("Error clearing contacts: {e}")),
        }
    }

    /// Replace the team board with the shell's current state
    pub fn save_teams(&mut self, payload: TeamBoardData) -> ApiResponse<()> {
        match self.board.save(payload.teams, payload.matchups) {
            Ok(()) => ApiResponse::ok("Teams saved successfully"),
            Err(e) => ApiResponse::err(format!("Error saving teams: {e}")),
        }
    }

    /// Re-read the team board from disk and hand it back
    pub fn load_teams(&mut self) -> ApiResponse<TeamBoardData> {
        match self.board.load() {
            Ok(()) if self.board.is_empty() => {
                ApiResponse::ok_with("No saved teams found", TeamBoardData::default())
            }
            Ok(()) => ApiResponse::ok_with(
                "Teams loaded successfully",
                TeamBoardData {
                    teams: self.board.teams().to_vec(),
                    matchups: self.board.matchups().to_vec(),
                },
            ),
            Err(e) => ApiResponse::err(format!("Error loading teams: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_then_get_all() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());

        let added = api.add_record("Jane Doe", " jane@x.com ", "555-1234", "");
        assert!(added.success);
        let contact = added.data.unwrap();
        assert_eq!(contact.id, 1);
        assert_eq!(contact.email, "jane@x.com");

        let all = api.get_all_records();
        assert!(all.success);
        assert_eq!(all.count, Some(1));
    }

    #[test]
    fn test_state_survives_reopen() {
        let tmp = tempdir().unwrap();
        {
            let mut api = Api::open(tmp.path());
            api.add_record("Alice", "alice@x.com", "1", "");
        }

        let api = Api::open(tmp.path());
        let all = api.get_all_records();
        assert_eq!(all.count, Some(1));
        assert_eq!(all.data.unwrap()[0].name, "Alice");
    }

    #[test]
    fn test_search_messages() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());
        api.add_record("Alice", "", "", "");
        api.add_record("Bob", "", "", "");

        let hits = api.search_records("alice");
        assert_eq!(hits.count, Some(1));
        assert_eq!(hits.message, "Found 1 result(s) for \"alice\"");

        let all = api.search_records("  ");
        assert_eq!(all.count, Some(2));
        assert_eq!(all.message, "Showing all contacts");
    }

    #[test]
    fn test_update_missing_id_fails_cleanly() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());

        let response = api.update_record(9, "x", "", "", "");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message, "No record found with ID 9");
    }

    #[test]
    fn test_delete_missing_id_fails_cleanly() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());

        let response = api.delete_record(3);
        assert!(!response.success);
        assert_eq!(response.message, "No record found with ID 3");
    }

    #[test]
    fn test_clear_all_then_fresh_ids() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());
        api.add_record("Alice", "", "", "");
        api.add_record("Bob", "", "", "");

        assert!(api.clear_all_data().success);
        assert_eq!(api.get_all_records().count, Some(0));

        let next = api.add_record("Carol", "", "", "");
        assert_eq!(next.data.unwrap().id, 1);
    }

    #[test]
    fn test_team_board_round_trip() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());

        let payload = TeamBoardData {
            teams: vec![TeamMember {
                team_number: "1".to_string(),
                name: "Charmander".to_string(),
                type1: "Fire".to_string(),
                type2: String::new(),
                dex_num: "4".to_string(),
                extra: String::new(),
            }],
            matchups: Vec::new(),
        };

        let saved = api.save_teams(payload);
        assert!(saved.success);
        assert_eq!(saved.message, "Teams saved successfully");

        let loaded = api.load_teams();
        assert!(loaded.success);
        assert_eq!(loaded.data.unwrap().teams[0].name, "Charmander");
    }

    #[test]
    fn test_load_teams_when_nothing_saved() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());

        let response = api.load_teams();
        assert!(response.success);
        assert_eq!(response.message, "No saved teams found");
        assert!(response.data.unwrap().teams.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let tmp = tempdir().unwrap();
        let mut api = Api::open(tmp.path());
        api.add_record("Alice", "", "", "");

        let value = serde_json::to_value(api.get_all_records()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 1);
        assert_eq!(value["data"][0]["Name"], "Alice");

        // Optional payload keys are omitted, not null
        let deleted = serde_json::to_value(api.delete_record(99)).unwrap();
        assert_eq!(deleted["success"], false);
        assert!(deleted.get("data").is_none());
        assert!(deleted.get("count").is_none());
    }

    #[test]
    fn test_open_with_unreadable_contacts_degrades_to_empty() {
        let tmp = tempdir().unwrap();
        std::fs::write(
            crate::config::contacts_path(tmp.path()),
            "ID,Name,Email,Phone,Notes\nnot-a-number,Alice,,,\n",
        )
        .unwrap();

        let api = Api::open(tmp.path());
        assert_eq!(api.get_all_records().count, Some(0));
    }
}
