//! In-process preference store.

use super::{PreferenceStore, StoreResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Non-durable store used by tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryPreferenceStore;
    use crate::store::PreferenceStore;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get_item("absent").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn writes_are_visible_to_reads() {
        let store = MemoryPreferenceStore::with_item("k", "old");
        store.set_item("k", "new").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }
}
