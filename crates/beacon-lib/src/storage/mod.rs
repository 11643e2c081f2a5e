//! Browser-local-storage style persistence.
//!
//! String values under string keys, best-effort and fallible. Nothing stored
//! here is a source of truth; callers must tolerate absent or stale values.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

pub mod json_file;

pub use json_file::JsonFileStore;

/// Storage failures. Always caught and logged at the point of use; they never
/// change the outcome of the operation that triggered them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not read storage key {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("Could not write storage key {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Keyed string storage with local-storage semantics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);

        // Removing an absent key is a no-op
        store.remove("theme").unwrap();
    }
}
