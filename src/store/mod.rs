//! CSV-backed record stores
//!
//! Each table is an owned in-memory list mirrored 1:1 with one CSV file on
//! disk; every mutation rewrites its file before returning.

pub mod contacts;
pub mod csv_file;
pub mod error;
pub mod teams;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use contacts::{Contact, ContactFields, ContactStore};
#[allow(unused_imports)]
pub use error::StoreError;
#[allow(unused_imports)]
pub use teams::{Matchup, TeamBoard, TeamMember};
