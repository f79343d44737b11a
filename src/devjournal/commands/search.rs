use crate::commands::{empty_journal, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;

/// True if `entry` matches the lower-cased query.
///
/// Titles are always searched; content and tags only when `titles_only` is off.
/// All comparisons are case-insensitive substring matches.
fn matches(entry: &Entry, query_lower: &str, titles_only: bool) -> bool {
    if entry.title.to_lowercase().contains(query_lower) {
        return true;
    }
    if titles_only {
        return false;
    }
    entry.content.to_lowercase().contains(query_lower) || entry.tags.any_contains(query_lower)
}

/// The entries matching `query`, in their original order. An empty query matches everything.
pub fn filter(entries: Vec<Entry>, query: &str, titles_only: bool) -> Vec<Entry> {
    let query_lower = query.to_lowercase();
    entries
        .into_iter()
        .filter(|e| matches(e, &query_lower, titles_only))
        .collect()
}

pub fn run<S: DataStore>(store: &S, query: &str, titles_only: bool) -> Result<CmdResult> {
    let entries = store.load()?;
    if entries.is_empty() {
        return Ok(empty_journal());
    }

    let found = filter(entries, query, titles_only);
    let mut result = CmdResult::default();
    if found.is_empty() {
        let message = if titles_only {
            format!("No match for {} with option --titles-only in journal.", query)
        } else {
            format!("No match for {} in journal.", query)
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed_entries(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{entry, sample_store};
    use crate::store::memory::InMemoryStore;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_entries
            .iter()
            .map(|e| e.title.as_str())
            .collect()
    }

    fn python_store() -> InMemoryStore {
        InMemoryStore::with_entries(vec![
            entry(1, "TODO", "Study pytest", "Pytest, testing"),
            entry(2, "Database", "Exercised with SQL", "database, SQL, query"),
            entry(3, "Python", "Refactor code and finish app", "programming"),
            entry(4, "Software Engineering", "The ZEN of Python", "readability"),
        ])
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let store = sample_store();
        let result = run(&store, "", false).unwrap();
        assert_eq!(titles(&result), vec!["TODO", "Database", "Rust", "Exercise"]);
    }

    #[test]
    fn matches_title_and_content() {
        let store = python_store();
        let result = run(&store, "Python", false).unwrap();
        assert_eq!(titles(&result), vec!["Python", "Software Engineering"]);
    }

    #[test]
    fn titles_only_ignores_content() {
        let store = python_store();
        let result = run(&store, "pYTHoN", true).unwrap();
        assert_eq!(titles(&result), vec!["Python"]);
    }

    #[test]
    fn tag_only_match_depends_on_titles_only() {
        let store = sample_store();

        let result = run(&store, "Python", false).unwrap();
        assert_eq!(titles(&result), vec!["TODO", "Exercise"]);

        let result = run(&store, "Python", true).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No match for Python with option --titles-only in journal."
        );
    }

    #[test]
    fn tags_match_by_substring() {
        let store = sample_store();
        let result = run(&store, "perform", false).unwrap();
        assert_eq!(titles(&result), vec!["Rust"]);
    }

    #[test]
    fn no_match_reports_query() {
        let store = sample_store();
        let result = run(&store, "Java", false).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].content, "No match for Java in journal.");
    }

    #[test]
    fn empty_journal_reports_message() {
        let store = InMemoryStore::new();
        let result = run(&store, "anything", false).unwrap();
        assert_eq!(result.messages[0].content, "No entries yet in the journal.");
    }
}
