//! Type-safe keys for settings storage.

use std::marker::PhantomData;

/// Register a type-safe settings key.
///
/// Associates a string key name with a value type at compile time.
///
/// # Example
/// ```rust
/// use prefstore_settings::register_setting_key;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct AppConfig {
///     theme: String,
///     auto_save: bool,
/// }
///
/// register_setting_key!(pub const CONFIG: AppConfig = "app_config");
///
/// assert_eq!(CONFIG.name(), "app_config");
/// ```
#[macro_export]
macro_rules! register_setting_key {
    ($vis:vis const $name:ident: $ty:ty = $key:literal) => {
        $vis const $name: $crate::Key<$ty> = $crate::Key::new($key);
    };
}

/// Type-safe key for settings storage.
///
/// Associates a string key name with a value type at compile time,
/// preventing type mismatches while maintaining ergonomic usage.
/// Uniqueness of names across settings is up to the caller, usually by
/// registering keys under a shared [scope](crate::SettingsRegistry::with_scope).
///
/// # Example
/// ```rust
/// use prefstore_settings::Key;
///
/// const MY_SETTING: Key<String> = Key::new("my_setting");
/// ```
#[derive(Debug)]
pub struct Key<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

// Manual impls so that `Key<T>` is `Copy` even when `T` isn't.
impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> Key<T> {
    /// Create a new type-safe key with the given storage name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Get the string key name used for storage.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
