//! # Storage Layer
//!
//! The journal is a single JSON document: an array of entries in creation
//! order. The [`DataStore`] trait abstracts where that document lives so the
//! command layer can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage at a configured path
//!   - Missing (or blank) file loads as an empty journal
//!   - Saves are full rewrites through a temp file + rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "TODO",
//!     "content": "Study pytest",
//!     "tags": ["Python", "testing"],
//!     "created_at": "2024-05-01T09:30:00Z"
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::Entry;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Abstract interface for journal storage.
///
/// There is no partial update: every mutation loads the whole sequence,
/// changes it in memory and saves it back.
pub trait DataStore {
    /// Load every entry, in stored order
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the stored journal with `entries`
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}

/// Checks the invariants a freshly decoded journal must satisfy.
/// Returns a description of the first violation.
pub(crate) fn check_entries(entries: &[Entry]) -> std::result::Result<(), String> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.id == 0 {
            return Err("entry ids must be positive, found 0".to_string());
        }
        if !seen.insert(entry.id) {
            return Err(format!("duplicate entry id {}", entry.id));
        }
        if entry.title.trim().is_empty() {
            return Err(format!("entry {} has an empty title", entry.id));
        }
    }
    Ok(())
}
