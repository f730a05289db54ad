//! Key-Value store backends with a typed, serializing front.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::CacheError;

/// Name of the snapshot file inside a [`FileStore`] data directory.
const STORAGE_FILE: &str = "storage.json";

/// A synchronous string-keyed, string-valued store.
///
/// Mirrors the browser's local storage: values are opaque strings, writes
/// replace the whole value, and there is no partial update.
pub trait KvStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: String) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List every key, in sorted order.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-memory store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Store backed by a single JSON file in a data directory.
///
/// The file is read once when the store is opened and rewritten in full
/// on every mutation, through a temporary file and a rename so a crash
/// never leaves a half-written snapshot behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            CacheError::OpenError(format!("cannot create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(STORAGE_FILE);
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        let previous = entries.insert(key.to_string(), value);
        self.flush(&entries).map_err(|e| {
            restore(&mut entries, key, previous);
            e
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        if let Some(previous) = entries.remove(key) {
            self.flush(&entries).map_err(|e| {
                restore(&mut entries, key, Some(previous));
                e
            })?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Put back the value `key` held before a write whose flush failed.
fn restore(entries: &mut BTreeMap<String, String>, key: &str, previous: Option<String>) {
    match previous {
        Some(value) => {
            entries.insert(key.to_string(), value);
        }
        None => {
            entries.remove(key);
        }
    }
}

/// Type-safe handle over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap; all clones share
/// the same backend.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KvStore>,
}

impl Cache {
    /// Wrap a store backend.
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap an already shared backend.
    pub fn from_arc(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Open a file-backed cache in `dir`.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Create a throwaway in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Replace the value under `key` with the JSON encoding of `value`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        debug!(key, bytes = raw.len(), "writing snapshot");
        self.store.set(key, raw)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        debug!(key, "deleting snapshot");
        self.store.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        items: Vec<String>,
        count: u32,
    }

    #[test]
    fn test_memory_roundtrip() {
        let cache = Cache::in_memory();
        let snap = Snapshot {
            items: vec!["whey".to_string()],
            count: 1,
        };
        cache.set("snap", &snap).unwrap();

        let loaded: Option<Snapshot> = cache.get("snap").unwrap();
        assert_eq!(loaded, Some(snap));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::in_memory();
        let loaded: Option<Snapshot> = cache.get("nothing").unwrap();
        assert!(loaded.is_none());
        assert!(!cache.exists("nothing").unwrap());
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let cache = Cache::in_memory();
        assert!(cache.delete("nothing").is_ok());
    }

    #[test]
    fn test_set_overwrites() {
        let cache = Cache::in_memory();
        cache.set("k", &1u32).unwrap();
        cache.set("k", &2u32).unwrap();
        assert_eq!(cache.get::<u32>("k").unwrap(), Some(2));
        assert_eq!(cache.keys().unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = MemoryStore::new();
        store.set("k", "{not json".to_string()).unwrap();
        let cache = Cache::new(store);
        assert!(matches!(
            cache.get::<Snapshot>("k"),
            Err(CacheError::Serialize(_))
        ));
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("k", &"v").unwrap();
        assert_eq!(other.get::<String>("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();

        {
            let cache = Cache::open_dir(dir.path()).unwrap();
            cache.set("token", &"abc").unwrap();
            cache.set("count", &3u32).unwrap();
            cache.delete("count").unwrap();
        }

        let cache = Cache::open_dir(dir.path()).unwrap();
        assert_eq!(cache.get::<String>("token").unwrap().as_deref(), Some("abc"));
        assert!(!cache.exists("count").unwrap());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set("k", "\"v\"".to_string()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_failed_flush_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("state");
        let cache = Cache::open_dir(&data).unwrap();
        cache.set("token", &"abc").unwrap();

        std::fs::remove_dir_all(&data).unwrap();
        assert!(cache.set("token", &"xyz").is_err());
        assert!(cache.set("user", &"rahul").is_err());
        assert!(cache.delete("token").is_err());

        assert_eq!(cache.get::<String>("token").unwrap().as_deref(), Some("abc"));
        assert!(!cache.exists("user").unwrap());
    }
}
