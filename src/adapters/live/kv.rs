//! Live key-value adapter storing one JSON file per key.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ports::kv::{KeyValueStore, KvError};

/// Directory-backed store: the value for `key` lives in `<root>/<key>.json`.
///
/// Writes go to a uniquely named temporary file in the same directory, are
/// synced to disk, and are then persisted over the target, so a reader never
/// sees a half-written value.
pub struct DirKeyValueStore {
    root: PathBuf,
}

impl DirKeyValueStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        std::fs::create_dir_all(&self.root)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.key_path(key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
