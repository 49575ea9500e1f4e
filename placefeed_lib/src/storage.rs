//! Key-value storage surface for local app state.
//!
//! Values are JSON-serialized strings behind a pluggable backend. There is
//! exactly one accessor path, and it is synchronous: backends are in-process
//! and small.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ServiceError;

/// Well-known storage keys.
pub mod keys {
    /// Mock auth token.
    pub const TOKEN: &str = "access_token";
    /// Logged-in user info.
    pub const USER_INFO: &str = "user_info";
    /// Persisted app settings.
    pub const SETTINGS: &str = "app_settings";
    /// Auto-saved settings-page draft text.
    pub const DRAFT_SETTINGS: &str = "draft_settings";
}

/// Raw string store behind the typed [`Storage`] facade.
pub trait StorageBackend: Send + Sync {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: String) -> Result<(), ServiceError>;
    fn remove_raw(&self, key: &str) -> Result<(), ServiceError>;
}

/// Thread-safe in-process backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    store: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.store.get(key).map(|entry| entry.value().clone())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), ServiceError> {
        self.store.remove(key);
        Ok(())
    }
}

/// File-backed backend that persists the whole map as one JSON object,
/// rewritten on every mutation.
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens the store at `path`, creating it lazily on first write. An
    /// unreadable state file is discarded rather than blocking startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("discarding unreadable state file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(ServiceError::Io(e)),
        };
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn persist(&self, items: &HashMap<String, String>) -> Result<(), ServiceError> {
        let contents = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), ServiceError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value);
        self.persist(&items)
    }

    fn remove_raw(&self, key: &str) -> Result<(), ServiceError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }
}

/// Typed facade over a storage backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// In-memory store, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Serializes `value` as JSON and stores it under `key`, overwriting
    /// any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, raw)
    }

    /// Reads and decodes the value under `key`. Missing or undecodable
    /// values read as `None`; decode failures are logged.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("discarding undecodable value under {:?}: {}", key, e);
                None
            }
        }
    }

    /// Removes the value under `key`, if any.
    pub fn remove(&self, key: &str) -> Result<(), ServiceError> {
        self.backend.remove_raw(key)
    }
}
