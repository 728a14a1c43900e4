//! Persisted Key-Value Storage
//!
//! String-to-string store with local-storage semantics: reads never fail,
//! writes replace the value. [`FileStore`] survives restarts; [`MemoryStore`]
//! lives as long as the process.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::utils::config_store::{load_json_file, save_json_file};

/// Persisted key-value store capability
pub trait KeyValueStore: Send + Sync {
    /// Stored value, if any
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; absent keys are not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<AHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        lock(&self.items).remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file, written through on every change.
///
/// Another process writing the same file is not coordinated with; the last
/// write wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items: BTreeMap<String, String> = load_json_file(&path).map_err(|e| Error::Storage {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), entries = items.len(), "Opened storage file");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<()> {
        save_json_file(&self.path, items).map_err(|e| Error::Storage {
            message: format!("failed to write {}: {e}", self.path.display()),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = lock(&self.items);
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = lock(&self.items);
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }
}
