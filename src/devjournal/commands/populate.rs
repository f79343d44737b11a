//! Demo data for trying the journal out.
//!
//! Entries are assembled from small fixed word lists. With a seed the output
//! is fully reproducible; without one the generator is seeded from the OS.
//!
//! Titles must stay unique, so a generated title that is already taken is
//! skipped and another one drawn. Draws are capped at
//! `count * DRAWS_PER_ENTRY`; a nearly full vocabulary can yield fewer entries
//! than requested.

use crate::commands::add::append;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JournalError, Result};
use crate::model::{title_taken, EntryDraft};
use crate::store::DataStore;
use crate::tags::Tags;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

const DRAWS_PER_ENTRY: usize = 10;

const TITLE_SUBJECTS: &[&str] = &[
    "Standup",
    "Code review",
    "Refactor",
    "Bug hunt",
    "Pairing",
    "Release",
    "Retro",
    "Spike",
    "Design notes",
    "On-call",
];

const TITLE_TOPICS: &[&str] = &[
    "parser",
    "database layer",
    "CLI",
    "build pipeline",
    "auth service",
    "cache",
    "test suite",
    "public API",
    "docs",
    "deploy scripts",
];

const CONTENT_PHRASES: &[&str] = &[
    "Finally understood why the borrow checker was unhappy.",
    "Split the module in two and the tests got simpler.",
    "Spent the morning chasing a flaky test; it was a timezone.",
    "Wrote down three ideas to try tomorrow.",
    "Paired on the error handling, much cleaner now.",
    "Benchmarked the hot path, nothing worth optimising yet.",
    "Read the docs twice before touching the config code.",
    "Shipped a small fix and a bigger changelog.",
    "Removed more code than I added today.",
    "Need to revisit the naming in the storage layer.",
];

const TAG_VOCABULARY: &[&str] = &[
    "work",
    "learning",
    "rust",
    "python",
    "testing",
    "debugging",
    "meeting",
    "idea",
    "reading",
    "refactoring",
    "urgent",
    "home",
];

/// Produces one synthetic entry draft.
pub fn generate<R: Rng>(rng: &mut R) -> EntryDraft {
    let subject = TITLE_SUBJECTS.choose(rng).copied().unwrap_or("Note");
    let topic = TITLE_TOPICS.choose(rng).copied().unwrap_or("journal");
    let content = CONTENT_PHRASES.choose(rng).copied().unwrap_or_default();
    let tag_count = rng.random_range(1..=3);
    let tags: Tags = TAG_VOCABULARY.choose_multiple(rng, tag_count).copied().collect();

    EntryDraft {
        title: format!("{}: {}", subject, topic),
        content: content.to_string(),
        tags,
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    count: usize,
    max: usize,
    seed: Option<u64>,
) -> Result<CmdResult> {
    if count > max {
        return Err(JournalError::validation(format!(
            "Please choose a number of entries not greater than {}.",
            max
        )));
    }
    if count == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to populate.")));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut entries = store.load()?;
    let mut created = Vec::with_capacity(count);
    let mut draws = 0;
    while created.len() < count && draws < count * DRAWS_PER_ENTRY {
        draws += 1;
        let draft = generate(&mut rng);
        if title_taken(&entries, &draft.title, None) {
            debug!(title = %draft.title, "skipping generated duplicate");
            continue;
        }
        created.push(append(&mut entries, draft)?);
    }

    if created.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "No entries added: every generated title is already in the journal.",
        )));
    }

    store.save(&entries)?;
    info!(
        count = created.len(),
        requested = count,
        seeded = seed.is_some(),
        "journal populated"
    );

    let message = if created.len() < count {
        CmdMessage::warning(format!(
            "Journal populated with {} new entries (requested {}; some duplicates were skipped).",
            created.len(),
            count
        ))
    } else {
        CmdMessage::success(format!(
            "Journal populated with {} new entries.",
            created.len()
        ))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_entries(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::MAX_ENTRY_ID;
    use crate::store::memory::fixtures::{entry, sample_store};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_requested_number_of_entries() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, 20, 50, None).unwrap();

        assert_eq!(store.load().unwrap().len(), 20);
        assert_eq!(
            result.messages[0].content,
            "Journal populated with 20 new entries."
        );
    }

    #[test]
    fn continues_id_sequence() {
        let mut store = sample_store();
        run(&mut store, 3, 50, Some(1)).unwrap();

        let ids: Vec<_> = store.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn generated_entries_are_valid() {
        let mut store = InMemoryStore::new();
        run(&mut store, 30, 50, Some(7)).unwrap();

        for e in store.load().unwrap() {
            assert!(!e.title.trim().is_empty());
            assert!((1..=3).contains(&e.tags.len()));
        }
    }

    #[test]
    fn same_seed_same_entries() {
        let mut first = InMemoryStore::new();
        let mut second = InMemoryStore::new();
        run(&mut first, 5, 50, Some(42)).unwrap();
        run(&mut second, 5, 50, Some(42)).unwrap();

        let strip = |store: &InMemoryStore| -> Vec<(String, String, Tags)> {
            store
                .load()
                .unwrap()
                .into_iter()
                .map(|e| (e.title, e.content, e.tags))
                .collect()
        };
        assert_eq!(strip(&first), strip(&second));
    }

    #[test]
    fn rejects_counts_above_max() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 51, 50, None).unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
        assert!(err.to_string().contains("not greater than 50"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn zero_count_does_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, 0, 50, None).unwrap();
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn generated_titles_are_unique() {
        let mut store = InMemoryStore::new();
        run(&mut store, 50, 50, Some(5)).unwrap();

        let mut titles: Vec<_> = store
            .load()
            .unwrap()
            .into_iter()
            .map(|e| e.title.to_lowercase())
            .collect();
        assert_eq!(titles.len(), 50);
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 50);
    }

    #[test]
    fn exhausted_vocabulary_adds_nothing() {
        let mut taken = Vec::new();
        for subject in TITLE_SUBJECTS {
            for topic in TITLE_TOPICS {
                let id = taken.len() as u64 + 1;
                taken.push(entry(id, &format!("{}: {}", subject, topic), "", ""));
            }
        }
        let mut store = InMemoryStore::with_entries(taken);

        let result = run(&mut store, 5, 50, Some(8)).unwrap();
        assert_eq!(store.save_count(), 0);
        assert!(result.affected_entries.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn hitting_the_id_ceiling_saves_nothing() {
        let mut store = InMemoryStore::with_entries(vec![entry(MAX_ENTRY_ID - 1, "Old", "", "")]);
        let err = run(&mut store, 2, 50, Some(3)).unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
        assert_eq!(store.save_count(), 0);
    }
}
