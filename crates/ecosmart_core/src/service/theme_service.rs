//! Theme toggle use-case service.
//!
//! # Responsibility
//! - Read the stored preference once at startup.
//! - Flip and persist the preference on every toggle.
//!
//! # Invariants
//! - After `load()` and after every `toggle()`, `current()` equals the
//!   value last written to (or read from) the store.
//! - Storage failures never block the display update; they are logged.

use crate::model::theme::Theme;
use crate::store::PreferenceStore;
use log::{debug, warn};

/// Owns the in-memory display mode and its durable copy.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the stored preference under `key`; unreadable storage is light.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.get_item(&key) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=theme_load module=theme status=error error={err}");
                None
            }
        };
        let current = Theme::from_stored(stored.as_deref());
        debug!(
            "event=theme_load module=theme status=ok theme={}",
            current.as_str()
        );
        Self {
            store,
            key,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the mode, persists it, and returns the new mode.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.persist();
        self.current
    }

    fn persist(&self) {
        match self.store.set_item(&self.key, self.current.as_str()) {
            Ok(()) => debug!(
                "event=theme_save module=theme status=ok theme={}",
                self.current.as_str()
            ),
            Err(err) => warn!(
                "event=theme_save module=theme status=error theme={} error={err}",
                self.current.as_str()
            ),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeController;
    use crate::model::theme::Theme;
    use crate::store::{MemoryPreferenceStore, PreferenceStore, StoreError, StoreResult};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Rejected("quota".to_string()))
        }
    }

    #[test]
    fn unreadable_store_defaults_to_light_and_still_toggles() {
        let mut controller = ThemeController::load(BrokenStore, "ecosmart-theme");
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
    }

    #[test]
    fn toggle_writes_through_borrowed_store() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ThemeController::load(&store, "k");
        controller.toggle();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("dark"));
        assert_eq!(controller.storage_key(), "k");
    }
}
