//! # Command Layer
//!
//! One module per journal operation. Every command follows the same shape:
//! load the full sequence from the [`DataStore`](crate::store::DataStore),
//! apply a plain function to it, and (for mutations) save it back. Nothing in
//! here prints or exits; results come back as a [`CmdResult`].
//!
//! Validation always happens before the sequence is touched, so a failing
//! command never saves.

use crate::model::{Entry, EntryId};

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod populate;
pub mod search;
pub mod stats;

pub use stats::JournalStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    pub stats: Option<JournalStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_stats(mut self, stats: JournalStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Result for read commands run against a journal with no entries.
pub(crate) fn empty_journal() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("No entries yet in the journal."))
}

/// Requested changes to one entry. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub id: EntryId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

impl EntryUpdate {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}
