//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Storage, StorageError};

/// In-process key/value storage.
///
/// Clones share the same entries, so a caller can keep a handle to inspect
/// what the store committed. Marking the storage unavailable makes every
/// operation fail, which stands in for a disabled or full browser store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with entries.
    #[must_use]
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.inner.borrow_mut().items = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        storage
    }

    /// Toggle whether every operation fails with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    /// Raw value stored under `key`, bypassing the availability switch.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.inner.borrow().unavailable {
            return Err(StorageError::Unavailable(
                "memory storage disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.inner
            .borrow_mut()
            .items
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.inner.borrow_mut().items.remove(key);
        Ok(())
    }
}
