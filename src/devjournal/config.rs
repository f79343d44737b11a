use crate::error::{JournalError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_JOURNAL_FILE: &str = "journal.json";
const DEFAULT_POPULATE_COUNT: usize = 10;
const DEFAULT_POPULATE_MAX: usize = 50;

/// Configuration for devjournal, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JournalConfig {
    /// Journal file used when no `--file` is given
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// How many entries `populate` creates when no count is given
    #[serde(default = "default_populate_count")]
    pub populate_count: usize,

    /// Upper bound for a single `populate` run
    #[serde(default = "default_populate_max")]
    pub populate_max: usize,
}

fn default_populate_count() -> usize {
    DEFAULT_POPULATE_COUNT
}

fn default_populate_max() -> usize {
    DEFAULT_POPULATE_MAX
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            file: None,
            populate_count: DEFAULT_POPULATE_COUNT,
            populate_max: DEFAULT_POPULATE_MAX,
        }
    }
}

impl JournalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JournalError::Io)?;
        let config: JournalConfig = serde_json::from_str(&content).map_err(|e| {
            JournalError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Resolves the journal path: an explicit path wins, then the configured
    /// file, then `journal.json` in the working directory.
    pub fn journal_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_FILE))
    }
}
