//! Key-value string storage
//!
//! `LocalStorage` wraps `window.localStorage` on the web. `MemoryStorage`
//! stands in for it on native builds and in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

/// String slot storage scoped to one origin
pub trait KeyValueStore {
    /// Read the value at `key`, `None` if never written or removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value at `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value at `key` (no-op if absent)
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage. Clones share the same map, like two handles on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Resolve `window.localStorage`
    pub fn open() -> Result<Self> {
        use crate::error::SnapshotError;

        let storage = web_sys::window()
            .ok_or_else(|| SnapshotError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| SnapshotError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| {
                SnapshotError::StorageUnavailable("localStorage disabled".to_string())
            })?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| crate::error::SnapshotError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Rejected when the origin quota is exceeded
        self.storage
            .set_item(key, value)
            .map_err(|e| crate::error::SnapshotError::StorageUnavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| crate::error::SnapshotError::StorageUnavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        // Removing again is fine
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_clones_share_contents() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("shared", "yes").unwrap();
        assert_eq!(b.get("shared").unwrap().as_deref(), Some("yes"));
    }
}
