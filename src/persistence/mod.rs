//! Durable key-value storage
//!
//! The game persists a single best score. On the web this is the browser
//! profile's LocalStorage; natively (and in tests) an in-memory map.

use std::collections::HashMap;

use crate::error::GameError;

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStore;

/// String key-value storage scoped to the player's profile
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, GameError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        (**self).set(key, value)
    }
}
