//! Persistent key-value storage used by the theme store.
//!
//! The store only ever needs string keys and string values, so the
//! capability is deliberately close to a browser `localStorage`.

mod file;

pub use file::FileStorage;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Error type for storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a valid key-value document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable string key-value store.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for a single session.
///
/// Clones share the same map, so a caller can keep a handle while the
/// store owns another one.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for environments without any persistence.
/// Reads are always empty and writes are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let mut handle = storage.clone();
        handle.set_item("theme", "dark").unwrap();

        assert_eq!(storage.get_item("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set_item("primary-color", "1 2% 3%").unwrap();
        storage.set_item("primary-color", "4 5% 6%").unwrap();

        assert_eq!(
            storage.get_item("primary-color").unwrap(),
            Some("4 5% 6%".to_string())
        );
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn noop_storage_forgets_everything() {
        let mut storage = NoopStorage;
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), None);
    }
}
