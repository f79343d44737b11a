use crate::commands::{empty_journal, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;
use crate::tags::normalize;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    /// Lower-cased tag
    pub tag: String,
    /// Number of entries carrying the tag
    pub count: usize,
}

/// Aggregate figures over the whole journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalStats {
    pub total_entries: usize,
    pub unique_tags: usize,
    /// Sorted by count (highest first), then tag name
    pub tag_counts: Vec<TagCount>,
    /// Every tag tied for the highest count
    pub most_used_tags: Vec<String>,
    pub average_content_length: usize,
    /// Entries per UTC creation day, oldest first
    pub entries_per_day: Vec<(NaiveDate, usize)>,
}

impl JournalStats {
    pub fn compute(entries: &[Entry]) -> Self {
        let mut by_tag: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        let mut content_chars = 0;

        for entry in entries {
            for tag in entry.tags.iter() {
                *by_tag.entry(normalize(tag)).or_default() += 1;
            }
            *by_day.entry(entry.created_at.date_naive()).or_default() += 1;
            content_chars += entry.content.chars().count();
        }

        let mut tag_counts: Vec<TagCount> = by_tag
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();
        tag_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        let top = tag_counts.first().map(|tc| tc.count).unwrap_or(0);
        let most_used_tags = tag_counts
            .iter()
            .take_while(|tc| tc.count == top)
            .map(|tc| tc.tag.clone())
            .collect();

        let average_content_length = if entries.is_empty() {
            0
        } else {
            (content_chars + entries.len() / 2) / entries.len()
        };

        Self {
            total_entries: entries.len(),
            unique_tags: tag_counts.len(),
            most_used_tags,
            tag_counts,
            average_content_length,
            entries_per_day: by_day.into_iter().collect(),
        }
    }

    /// How many entries carry `tag` (case-insensitive).
    pub fn tag_count(&self, tag: &str) -> usize {
        let key = normalize(tag);
        self.tag_counts
            .iter()
            .find(|tc| tc.tag == key)
            .map(|tc| tc.count)
            .unwrap_or(0)
    }

    /// Count shared by the most used tags, 0 when there are no tags.
    pub fn most_used_count(&self) -> usize {
        self.tag_counts.first().map(|tc| tc.count).unwrap_or(0)
    }
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let entries = store.load()?;
    let stats = JournalStats::compute(&entries);
    let result = if entries.is_empty() {
        empty_journal()
    } else {
        CmdResult::default()
    };
    Ok(result.with_stats(stats))
}
