//! Key-value storage behind the offline cache
//!
//! In the browser this is `window.localStorage`; elsewhere (and in tests)
//! a [`MemoryStore`] stands in.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed string storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.clear())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = localStorage, js_name = getItem, catch)]
        fn get_item(key: &str) -> Result<Option<String>, JsValue>;

        #[wasm_bindgen(js_namespace = localStorage, js_name = setItem, catch)]
        fn set_item(key: &str, value: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = localStorage, js_name = removeItem, catch)]
        fn remove_item(key: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = localStorage, js_name = clear, catch)]
        fn clear_all() -> Result<(), JsValue>;
    }

    fn unavailable(err: JsValue) -> StorageError {
        StorageError::Unavailable(format!("{:?}", err))
    }

    /// `window.localStorage`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            get_item(key).map_err(unavailable)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            set_item(key, value).map_err(unavailable)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            remove_item(key).map_err(unavailable)
        }

        fn clear(&self) -> Result<(), StorageError> {
            clear_all().map_err(unavailable)
        }
    }
}

/// JSON values over a [`KeyValueStore`]
///
/// Failures are logged and swallowed: a broken store behaves like an
/// empty one and writes are dropped.
#[derive(Debug, Clone)]
pub struct LocalCache<S> {
    store: S,
}

impl<S: KeyValueStore> LocalCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(key, &json));
        if let Err(e) = result {
            error!(key, "Error saving to storage: {}", e);
        }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let result = self.store.get(key).and_then(|raw| {
            raw.map(|json| serde_json::from_str(&json))
                .transpose()
                .map_err(StorageError::from)
        });
        match result {
            Ok(value) => value,
            Err(e) => {
                error!(key, "Error loading from storage: {}", e);
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            error!(key, "Error removing from storage: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            error!("Error clearing storage: {}", e);
        }
    }
}
