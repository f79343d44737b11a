use super::{check_entries, DataStore};
use crate::error::{JournalError, Result};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Journal stored as one JSON file at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(JournalError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "journal".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "journal file missing, starting empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(JournalError::Io)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // Invalid UTF-8 is a decode error like any other malformed content
        let entries: Vec<Entry> = serde_json::from_slice(&bytes)
            .map_err(|e| JournalError::corrupt(&self.path, e))?;
        check_entries(&entries).map_err(|reason| JournalError::corrupt(&self.path, reason))?;

        debug!(path = %self.path.display(), count = entries.len(), "loaded journal");
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(JournalError::Serialization)?;

        // Write beside the target, then rename over it
        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JournalError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JournalError::Io(e));
        }

        debug!(path = %self.path.display(), count = entries.len(), "saved journal");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::entry;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("journal.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn blank_file_loads_empty() {
        let (_dir, store) = setup();
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, mut store) = setup();
        let entries = vec![
            entry(1, "TODO", "Study pytest", "Python, testing"),
            entry(3, "Database", "", ""),
        ];
        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, mut store) = setup();
        store
            .save(&[entry(1, "A", "", ""), entry(2, "B", "", "")])
            .unwrap();
        store.save(&[entry(2, "B", "", "")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/journal.json"));
        store.save(&[entry(1, "A", "", "")]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.save(&[entry(1, "A", "", "")]).unwrap();

        for item in fs::read_dir(dir.path()).unwrap() {
            let path = item.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn writes_the_documented_schema() {
        let (_dir, mut store) = setup();
        store.save(&[entry(1, "A", "x", "work")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let first = &raw.as_array().unwrap()[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["title"], "A");
        assert_eq!(first["content"], "x");
        assert_eq!(first["tags"], serde_json::json!(["work"]));
        assert!(first["created_at"].as_str().unwrap().starts_with("20"));
    }

    #[test]
    fn truncated_json_is_corrupt() {
        let (_dir, store) = setup();
        fs::write(store.path(), r#"[{"id": 1, "title": "A", "con"#).unwrap();
        assert!(matches!(
            store.load(),
            Err(JournalError::CorruptData { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_corrupt() {
        let (_dir, store) = setup();
        fs::write(store.path(), b"[\xff\xfe]").unwrap();
        assert!(matches!(
            store.load(),
            Err(JournalError::CorruptData { .. })
        ));
    }

    #[test]
    fn malformed_stored_tags_are_corrupt() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"id": 1, "title": "A", "content": "", "tags": ["", "  x "], "created_at": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, JournalError::CorruptData { .. }));
        assert!(err.to_string().contains("tag is empty"));
    }

    #[test]
    fn missing_field_is_corrupt() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"id": 1, "title": "A", "tags": [], "created_at": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert!(matches!(
            store.load(),
            Err(JournalError::CorruptData { .. })
        ));
    }

    #[test]
    fn wrong_type_is_corrupt() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"id": "1", "title": "A", "content": "", "tags": [], "created_at": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert!(matches!(
            store.load(),
            Err(JournalError::CorruptData { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_corrupt() {
        let (_dir, mut store) = setup();
        store
            .save(&[entry(1, "A", "", ""), entry(1, "B", "", "")])
            .unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("duplicate entry id 1"));
    }

    #[test]
    fn corrupt_file_is_left_untouched() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{not json").unwrap();
        let _ = store.load();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{not json");
    }
}
