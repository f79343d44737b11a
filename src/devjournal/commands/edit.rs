use crate::commands::{CmdMessage, CmdResult, EntryUpdate};
use crate::error::Result;
use crate::model::{ensure_title_available, find_index, validate_title, Entry};
use crate::store::DataStore;
use crate::tags::Tags;
use tracing::info;

/// An [`EntryUpdate`] whose fields have already passed validation.
#[derive(Debug, Clone, Default)]
struct ValidatedUpdate {
    title: Option<String>,
    content: Option<String>,
    tags: Option<Tags>,
}

impl ValidatedUpdate {
    fn parse(update: &EntryUpdate) -> Result<Self> {
        Ok(Self {
            title: update.title.as_deref().map(validate_title).transpose()?,
            content: update.content.clone(),
            tags: update.tags.as_deref().map(Tags::parse).transpose()?,
        })
    }

    /// Overwrites the provided fields. `id` and `created_at` are never touched.
    fn apply(self, entry: &mut Entry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(tags) = self.tags {
            entry.tags = tags;
        }
    }
}

/// Applies `update` to the matching entry in place and returns its new state.
pub fn apply(entries: &mut [Entry], update: &EntryUpdate) -> Result<Entry> {
    let validated = ValidatedUpdate::parse(update)?;
    let idx = find_index(entries, update.id)?;
    if let Some(title) = &validated.title {
        ensure_title_available(entries, title, Some(update.id))?;
    }
    let entry = &mut entries[idx];
    validated.apply(entry);
    Ok(entry.clone())
}

pub fn run<S: DataStore>(store: &mut S, update: &EntryUpdate) -> Result<CmdResult> {
    let mut entries = store.load()?;

    if update.is_empty() {
        find_index(&entries, update.id)?;
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Nothing to change for entry {}",
            update.id
        ))));
    }

    let updated = apply(&mut entries, update)?;
    store.save(&entries)?;
    info!(id = updated.id, "entry updated");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Entry updated ({}): {}",
            updated.id, updated.title
        )))
        .with_affected_entries(vec![updated]))
}
