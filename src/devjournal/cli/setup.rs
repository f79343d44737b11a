use clap::{Parser, Subcommand};
use devjournal::model::EntryId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devjournal", bin_name = "devjournal", version)]
#[command(about = "A developer journal for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal file (defaults to the configured file, then ./journal.json)
    #[arg(short, long, global = true, env = "DEVJOURNAL_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry
    #[command(alias = "n")]
    Add {
        /// Title of the entry
        #[arg(long)]
        title: String,

        /// Content of the entry (may be empty)
        #[arg(long)]
        content: String,

        /// Comma-separated tags, e.g. "work,urgent"
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Show all entries
    #[command(alias = "ls")]
    Display {
        /// Only show entries with any of these tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show totals, tag counts and activity per day
    Stats,

    /// Search titles, content and tags
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Limit the search to titles
        #[arg(long)]
        titles_only: bool,
    },

    /// Change the title, content or tags of an entry
    #[command(alias = "e")]
    Edit {
        /// Id of the entry
        id: EntryId,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New comma-separated tags (replaces the existing ones)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Id of the entry
        id: EntryId,
    },

    /// Fill the journal with demo entries
    Populate {
        /// Number of entries to create
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}
