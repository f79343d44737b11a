use crate::error::{JournalError, Result};
use crate::tags::Tags;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

/// Ids are kept short enough to type; the journal refuses to grow past this.
pub const MAX_ENTRY_ID: EntryId = 99_999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub tags: Tags,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Builds a new entry, timestamped now (whole seconds).
    pub fn new(id: EntryId, title: String, content: String, tags: Tags) -> Self {
        Self {
            id,
            title,
            content,
            tags,
            created_at: Utc::now().trunc_subsecs(0),
        }
    }
}

/// Validated input for a new entry, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub tags: Tags,
}

impl EntryDraft {
    /// Validates raw user input. The title is trimmed and must not be empty.
    pub fn parse(title: &str, content: &str, tags: &str) -> Result<Self> {
        Ok(Self {
            title: validate_title(title)?,
            content: content.to_string(),
            tags: Tags::parse(tags)?,
        })
    }
}

pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(JournalError::validation("Title cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// True if another entry already uses `title`, ignoring case.
/// The entry `except` is left out, so an entry may keep its own title.
pub fn title_taken(entries: &[Entry], title: &str, except: Option<EntryId>) -> bool {
    let wanted = title.to_lowercase();
    entries
        .iter()
        .filter(|e| Some(e.id) != except)
        .any(|e| e.title.to_lowercase() == wanted)
}

pub fn ensure_title_available(
    entries: &[Entry],
    title: &str,
    except: Option<EntryId>,
) -> Result<()> {
    if title_taken(entries, title, except) {
        return Err(JournalError::validation(format!(
            "An entry with the title \"{}\" already exists",
            title
        )));
    }
    Ok(())
}

/// Next id: one past the highest existing id, or 1 for an empty journal.
pub fn next_entry_id(entries: &[Entry]) -> Result<EntryId> {
    let max_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
    if max_id >= MAX_ENTRY_ID {
        return Err(JournalError::validation(format!(
            "The journal has reached the maximum id ({}). Delete an entry before adding a new one.",
            MAX_ENTRY_ID
        )));
    }
    Ok(max_id + 1)
}

pub fn find_index(entries: &[Entry], id: EntryId) -> Result<usize> {
    entries
        .iter()
        .position(|e| e.id == id)
        .ok_or(JournalError::NotFound(id))
}
