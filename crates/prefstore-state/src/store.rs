use crate::backends::StoreConfiguration;

/// An error resulting from operations on a store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// A backend failure that has no dedicated variant.
    #[error("Internal error: {0}")]
    Internal(String),

    /// An internal database error.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    /// The configuration can't be opened by this build.
    #[error("Store configuration not supported: {0:?}")]
    UnsupportedConfiguration(StoreConfiguration),
}

/// A flat, string-keyed store of raw byte values.
///
/// Implementations are shared between every setting that points at them, so all methods take
/// `&self` and must be safe to call from multiple threads. Nothing above this trait caches
/// values: every call is expected to observe the current contents of the backing storage.
pub trait Store: Send + Sync {
    /// Retrieves the raw value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Returns `true` if any value is stored under `key`, regardless of its contents.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
