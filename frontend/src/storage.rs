//! JSON-valued key/value persistence.
//!
//! [`Storage`] never surfaces an error: failures are logged and turned into
//! `false` (writes) or the caller's default (reads).

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Raw string storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct Storage<B> {
    backend: B,
}

impl<B: KeyValueStore> Storage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set_item(key, &raw));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving to storage ({}): {}", key, e);
                false
            }
        }
    }

    /// Missing keys and undecodable values both yield `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::error!("Error reading from storage ({}): {}", key, e);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Error reading from storage ({}): {}", key, e);
                default
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error removing from storage ({}): {}", key, e);
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error clearing storage: {}", e);
                false
            }
        }
    }
}
