//! `window.localStorage` preference store.

use crate::dom;
use ecosmart_core::{PreferenceStore, StoreError, StoreResult};

/// Preference store over the page's `localStorage`, when the host allows it.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        Self {
            inner: dom::window().and_then(|window| window.local_storage().ok().flatten()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn storage(&self) -> StoreResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(dom::describe(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected(dom::describe(&err)))
    }
}
