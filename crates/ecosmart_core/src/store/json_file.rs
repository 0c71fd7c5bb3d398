//! JSON file preference store for native hosts.
//!
//! # Invariants
//! - A missing file reads as an empty store.
//! - Writes rewrite the whole file; unrelated keys are preserved.

use super::{PreferenceStore, StoreResult};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable store backed by one pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&items)?)?;
        debug!(
            "event=preference_write module=store status=ok keys={}",
            items.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFilePreferenceStore;
    use crate::store::{PreferenceStore, StoreError};

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get_item("ecosmart-theme").unwrap(), None);
    }

    #[test]
    fn write_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = JsonFilePreferenceStore::new(&path);
        store.set_item("other", "kept").unwrap();
        store.set_item("ecosmart-theme", "dark").unwrap();

        let reopened = JsonFilePreferenceStore::new(&path);
        assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("kept"));
        assert_eq!(
            reopened.get_item("ecosmart-theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonFilePreferenceStore::new(&path)
            .get_item("ecosmart-theme")
            .unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
