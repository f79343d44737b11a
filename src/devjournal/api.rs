//! # API Facade
//!
//! The single entry point for journal operations, whatever UI sits on top.
//! It dispatches to `commands/*.rs` and returns their [`CmdResult`]s; it does
//! no I/O or formatting of its own.
//!
//! `JournalApi<S: DataStore>` is generic over the storage backend:
//! - Production: `JournalApi<FileStore>`
//! - Testing: `JournalApi<InMemoryStore>`

use crate::commands;
use crate::config::JournalConfig;
use crate::error::Result;
use crate::model::EntryId;
use crate::store::DataStore;

pub struct JournalApi<S: DataStore> {
    store: S,
    config: JournalConfig,
}

impl<S: DataStore> JournalApi<S> {
    pub fn new(store: S, config: JournalConfig) -> Self {
        Self { store, config }
    }

    pub fn add_entry(&mut self, title: &str, content: &str, tags: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, content, tags)
    }

    pub fn list_entries(&self, tags: &[String]) -> Result<CmdResult> {
        commands::list::run(&self.store, tags)
    }

    pub fn search_entries(&self, query: &str, titles_only: bool) -> Result<CmdResult> {
        commands::search::run(&self.store, query, titles_only)
    }

    pub fn edit_entry(&mut self, update: &EntryUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, update)
    }

    pub fn delete_entry(&mut self, id: EntryId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    /// Populates with `count` entries, or the configured default when `None`.
    pub fn populate(&mut self, count: Option<usize>, seed: Option<u64>) -> Result<CmdResult> {
        let count = count.unwrap_or(self.config.populate_count);
        commands::populate::run(&mut self.store, count, self.config.populate_max, seed)
    }
}

pub use commands::stats::TagCount;
pub use commands::{CmdMessage, CmdResult, EntryUpdate, JournalStats, MessageLevel};
