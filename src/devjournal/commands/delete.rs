use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{find_index, Entry, EntryId};
use crate::store::DataStore;
use tracing::info;

/// Removes the entry with `id`, keeping the others in order. Ids are not renumbered.
pub fn remove(entries: &mut Vec<Entry>, id: EntryId) -> Result<Entry> {
    let idx = find_index(entries, id)?;
    Ok(entries.remove(idx))
}

pub fn run<S: DataStore>(store: &mut S, id: EntryId) -> Result<CmdResult> {
    let mut entries = store.load()?;
    let removed = remove(&mut entries, id)?;
    store.save(&entries)?;
    info!(id, "entry deleted");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Entry removed ({}): {}",
            removed.id, removed.title
        )))
        .with_affected_entries(vec![removed]))
}
