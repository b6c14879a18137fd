use std::sync::Arc;

use crate::store::{Store, StoreError};

mod configuration;
mod memory;
mod sqlite;

pub use configuration::StoreConfiguration;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Open the store described by `configuration`, ready to be shared between settings.
pub fn open_store(configuration: StoreConfiguration) -> Result<Arc<dyn Store>, StoreError> {
    match configuration {
        StoreConfiguration::Memory => Ok(Arc::new(MemoryStore::default())),
        sqlite @ StoreConfiguration::Sqlite { .. } => Ok(Arc::new(SqliteStore::open(sqlite)?)),
    }
}
