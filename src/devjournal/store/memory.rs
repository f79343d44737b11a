use super::{check_entries, DataStore};
use crate::error::{JournalError, Result};
use crate::model::Entry;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        check_entries(&self.entries)
            .map_err(|reason| JournalError::corrupt("<memory>", reason))?;
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
