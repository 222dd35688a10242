//! Browser LocalStorage backend

use web_sys::Storage;

use super::KeyValueStore;
use crate::error::GameError;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the window's LocalStorage
    pub fn open() -> Result<Self, GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| GameError::Storage(GameError::describe(&e)))?
            .ok_or_else(|| GameError::Storage("LocalStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        self.storage
            .get_item(key)
            .map_err(|e| GameError::Storage(GameError::describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GameError::Storage(GameError::describe(&e)))
    }
}
