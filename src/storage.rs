//! Key/value byte storage
//!
//! The word-set store and theme store only need two primitives, `get`
//! and `set`, over opaque bytes. Any durable medium can back them; two
//! backends are provided:
//!
//! - [`MemoryStorage`]: a `HashMap`, for tests and embedding
//! - [`FileStorage`]: one file per key inside a data directory
//!
//! File layout:
//! ```text
//! ~/.rapid-recall/
//!   rapid-recall_word-sets.json
//!   rapid-recall_theme.json
//! ```

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Byte-oriented key/value persistence
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Directory-backed storage, one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for storage; it is created on the first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name_for(key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        // Write to a temp file, then rename over the target
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        tracing::trace!(key, path = %path.display(), len = bytes.len(), "stored");
        Ok(())
    }
}

/// Map a storage key to a safe file name
fn file_name_for(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    name.push_str(".json");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", b"one").unwrap();
        storage.set("k", b"two").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_file_name_for() {
        assert_eq!(file_name_for("rapid-recall:word-sets"), "rapid-recall_word-sets.json");
        assert_eq!(file_name_for("../escape"), ".._escape.json");
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("data"));

        assert_eq!(storage.get("rapid-recall:theme").unwrap(), None);

        storage.set("rapid-recall:theme", b"dark").unwrap();
        assert_eq!(storage.get("rapid-recall:theme").unwrap(), Some(b"dark".to_vec()));
        assert!(storage.path_for("rapid-recall:theme").exists());

        // No temp file left behind
        let leftovers = fs::read_dir(storage.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_file_storage_overwrite() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set("key", b"first").unwrap();
        storage.set("key", b"second").unwrap();
        assert_eq!(storage.get("key").unwrap(), Some(b"second".to_vec()));
    }
}
