//! Durable key-value preference storage.
//!
//! # Responsibility
//! - Define the string key-value contract behind the theme preference.
//! - Provide in-memory and (native) JSON file implementations.
//!
//! # Invariants
//! - `get_item` on a key never written returns `Ok(None)`.
//! - A successful `set_item` is visible to the next `get_item` on the same store.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(not(target_arch = "wasm32"))]
mod json_file;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use json_file::JsonFilePreferenceStore;
pub use memory::MemoryPreferenceStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Preference storage errors.
#[derive(Debug)]
pub enum StoreError {
    /// The host offers no storage (disabled, private mode, missing API).
    Unavailable(String),
    /// The host refused the write (quota, security policy).
    Rejected(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "preference storage unavailable: {message}"),
            Self::Rejected(message) => write!(f, "preference write rejected: {message}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "preference file is malformed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Unavailable(_) | Self::Rejected(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// String key-value store with `localStorage` semantics.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}
