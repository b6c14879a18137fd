#![doc = include_str!("../README.md")]

/// The raw key-value store interface shared by every backend.
pub mod store;

mod backends;

pub use backends::{MemoryStore, SqliteStore, StoreConfiguration, open_store};
pub use store::{Store, StoreError};
