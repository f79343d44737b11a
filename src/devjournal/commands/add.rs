use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ensure_title_available, next_entry_id, Entry, EntryDraft};
use crate::store::DataStore;
use tracing::info;

/// Appends a validated draft to `entries`, returning the new entry.
/// Titles are unique across the journal, ignoring case.
pub fn append(entries: &mut Vec<Entry>, draft: EntryDraft) -> Result<Entry> {
    ensure_title_available(entries, &draft.title, None)?;
    let id = next_entry_id(entries)?;
    let entry = Entry::new(id, draft.title, draft.content, draft.tags);
    entries.push(entry.clone());
    Ok(entry)
}

pub fn run<S: DataStore>(
    store: &mut S,
    title: &str,
    content: &str,
    tags: &str,
) -> Result<CmdResult> {
    let draft = EntryDraft::parse(title, content, tags)?;

    let mut entries = store.load()?;
    let entry = append(&mut entries, draft)?;
    store.save(&entries)?;
    info!(id = entry.id, "entry added");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Entry saved ({}): {}",
            entry.id, entry.title
        )))
        .with_affected_entries(vec![entry]))
}
