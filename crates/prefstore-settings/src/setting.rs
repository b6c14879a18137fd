//! A typed handle to a single setting.

use std::sync::Arc;

use log::warn;
use prefstore_state::{Store, StoreError};
use serde::{Serialize, de::DeserializeOwned};

use crate::codec::{Codec, JsonCodec};

/// A typed, default-falling-back view of one slot in a [`Store`].
///
/// The handle holds no copy of the stored value: every call goes to the store, so changes made
/// through other handles (or other processes sharing a durable store) are visible on the next
/// read. Dropping the handle never touches the stored value.
///
/// Only store failures are returned as errors. Stored bytes that fail to decode read as the
/// default, and values that fail to encode are not written. Both cases are logged at `warn`.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
///
/// use prefstore_settings::{MemoryStore, TypedSetting};
///
/// let setting = TypedSetting::new(Arc::new(MemoryStore::default()), "volume", 50u8);
///
/// assert_eq!(setting.read().unwrap(), 50);
/// setting.write(&80).unwrap();
/// assert_eq!(setting.read().unwrap(), 80);
/// ```
#[derive(Clone)]
pub struct TypedSetting<T, C = JsonCodec> {
    store: Arc<dyn Store>,
    key: String,
    default_value: T,
    codec: C,
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for TypedSetting<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedSetting")
            .field("key", &self.key)
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}

impl<T> TypedSetting<T> {
    /// Create a setting stored as JSON under `key`.
    pub fn new(store: Arc<dyn Store>, key: impl Into<String>, default_value: T) -> Self {
        Self::with_codec(store, key, default_value, JsonCodec)
    }
}

impl<T, C: Codec> TypedSetting<T, C> {
    /// Create a setting stored under `key` using a custom codec.
    pub fn with_codec(
        store: Arc<dyn Store>,
        key: impl Into<String>,
        default_value: T,
        codec: C,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            default_value,
            codec,
        }
    }

    /// The storage key this setting is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value returned when nothing usable is stored.
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Read the current value, or the default if the key is absent or can't be decoded.
    pub fn read(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Clone,
    {
        let Some(bytes) = self.store.get(&self.key)? else {
            return Ok(self.default_value.clone());
        };

        match self.codec.decode::<T>(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Failed to read setting '{}', using default: {}", self.key, e);
                Ok(self.default_value.clone())
            }
        }
    }

    /// Replace the stored value.
    ///
    /// If `value` can't be encoded the store is left unchanged and `Ok(())` is returned.
    pub fn write(&self, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let bytes = match self.codec.encode(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to write setting '{}', value discarded: {}", self.key, e);
                return Ok(());
            }
        };

        self.store.set(&self.key, bytes)
    }

    /// Returns `true` if the store holds no value for this key.
    ///
    /// A stored value that fails to decode still counts as set.
    pub fn is_unset(&self) -> Result<bool, StoreError> {
        Ok(!self.store.contains(&self.key)?)
    }

    /// Remove the stored value, if any. Subsequent reads return the default.
    pub fn unset(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}
