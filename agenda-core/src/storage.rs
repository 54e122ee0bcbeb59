//! Key-value persistence collaborators.
//!
//! The event collection and the theme selection are both kept behind a
//! single-key read/write interface, the way a browser app keeps them in
//! local storage. `FileStore` is the on-disk implementation; `MemoryStore`
//! backs tests and stateless sessions.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::AgendaResult;

/// External key-value collaborator holding serialized application state.
pub trait KeyValueStore {
    /// The value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> AgendaResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> AgendaResult<()>;
}

/// One `<key>.json` file per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> AgendaResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> AgendaResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = path.with_extension("json.tmp");

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-memory collaborator for tests and stateless sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> AgendaResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AgendaResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.write("events", "[1,2,3]").unwrap();
        assert_eq!(store.read("events").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_store_reads_none_for_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read("events").unwrap(), None);
    }

    #[test]
    fn file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.write("theme", "purple").unwrap();
        store.write("theme", "green").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("green"));
    }

    #[test]
    fn file_store_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/agenda"));

        store.write("events", "[]").unwrap();
        assert_eq!(store.read("events").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("events").unwrap(), None);

        store.write("events", "[]").unwrap();
        assert_eq!(store.read("events").unwrap().as_deref(), Some("[]"));
    }
}
