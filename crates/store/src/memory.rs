//! In-memory and no-op store backends.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{KeyValueStore, StoreResult};

/// Ephemeral store backed by a `HashMap`. Used by tests and as an explicit
/// non-persistent mode; contents die with the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// The storage-unavailable fallback: reads are always absent, writes and
/// clears are accepted and dropped.
///
/// Selected at startup when the state directory cannot be used, so callers
/// degrade to default values instead of failing.
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
        tracing::debug!(key, "Storage unavailable, dropping write");
        Ok(())
    }

    fn clear(&self, _key: &str) -> StoreResult<()> {
        Ok(())
    }
}
