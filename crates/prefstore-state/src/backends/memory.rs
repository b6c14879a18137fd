use std::{collections::HashMap, sync::RwLock};

use crate::store::{Store, StoreError};

/// A process-local [`Store`] backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore(RwLock<HashMap<String, Vec<u8>>>);

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .0
            .read()
            .expect("RwLock should not be poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.0
            .write()
            .expect("RwLock should not be poisoned")
            .insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.0
            .write()
            .expect("RwLock should not be poisoned")
            .remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .0
            .read()
            .expect("RwLock should not be poisoned")
            .contains_key(key))
    }
}
