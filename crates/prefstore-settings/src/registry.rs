use std::sync::Arc;

use prefstore_state::{Store, StoreConfiguration, StoreError, open_store};

use crate::{Key, TypedSetting};

/// The settings namespace of a host program.
///
/// Owns a handle to the shared [`Store`] and an optional scope that prefixes every key, so that
/// independent groups of settings can share one store without colliding. The host creates the
/// registry during startup and passes it (or clones of it) to the components that need settings.
///
/// # Example
/// ```rust
/// use prefstore_settings::{SettingsRegistry, StoreConfiguration, register_setting_key};
///
/// register_setting_key!(const FONT_SIZE: u8 = "fontSize");
///
/// let settings = SettingsRegistry::open(StoreConfiguration::Memory, "editor.").unwrap();
/// let font_size = settings.setting(FONT_SIZE, 12);
///
/// assert_eq!(font_size.key(), "editor.fontSize");
/// assert_eq!(font_size.read().unwrap(), 12);
/// ```
#[derive(Clone)]
pub struct SettingsRegistry {
    store: Arc<dyn Store>,
    scope: String,
}

impl std::fmt::Debug for SettingsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsRegistry")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl SettingsRegistry {
    /// Create a registry with no key scope.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_scope(store, "")
    }

    /// Create a registry whose keys are all prefixed with `scope`.
    pub fn with_scope(store: Arc<dyn Store>, scope: impl Into<String>) -> Self {
        Self {
            store,
            scope: scope.into(),
        }
    }

    /// Open the store described by `configuration` and create a registry over it.
    pub fn open(
        configuration: StoreConfiguration,
        scope: impl Into<String>,
    ) -> Result<Self, StoreError> {
        Ok(Self::with_scope(open_store(configuration)?, scope))
    }

    /// Get a handle to the setting registered under `key`, reading as `default_value` while unset.
    pub fn setting<T>(&self, key: Key<T>, default_value: T) -> TypedSetting<T> {
        TypedSetting::new(
            Arc::clone(&self.store),
            format!("{}{}", self.scope, key.name()),
            default_value,
        )
    }

    /// The store shared by every setting of this registry.
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::clone(&self.store)
    }

    /// The prefix applied to every key.
    pub fn scope(&self) -> &str {
        &self.scope
    }
}
