//! Persisted Storage
//!
//! Key-value slots that survive page reloads. The list store is generic
//! over [`ListStorage`] so it runs against `localStorage` in the browser and
//! against [`MemoryStorage`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StorageError, StorageResult};

/// A durable string slot store
pub trait ListStorage {
    /// Read the raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `window.localStorage`
///
/// Holds no handle; the storage object is looked up on every call so the
/// type stays `Send + Sync` for reactive containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ListStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// In-memory storage
///
/// Clones share the same slots, so a test can keep one handle and inspect
/// what a store wrote through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl ListStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap(), Some("v".to_string()));

        handle.set("k", "w").unwrap();
        assert_eq!(storage.raw("k"), Some("w".to_string()));
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }
}
