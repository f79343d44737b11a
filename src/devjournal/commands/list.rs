use crate::commands::{empty_journal, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;

/// Entries carrying any of `tags` (exact, case-insensitive). An empty filter keeps everything.
pub fn filter_by_tags(entries: Vec<Entry>, tags: &[String]) -> Vec<Entry> {
    if tags.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|e| tags.iter().any(|t| e.tags.contains(t)))
        .collect()
}

pub fn run<S: DataStore>(store: &S, tags: &[String]) -> Result<CmdResult> {
    let entries = store.load()?;
    if entries.is_empty() {
        return Ok(empty_journal());
    }

    let listed = filter_by_tags(entries, tags);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No entries tagged {}.",
            tags.join(", ")
        )));
    }
    Ok(result.with_listed_entries(listed))
}
