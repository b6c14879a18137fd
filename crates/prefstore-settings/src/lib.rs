#![doc = include_str!("../README.md")]

mod codec;
mod key;
mod registry;
mod setting;

pub use codec::{Codec, CodecError, JsonCodec};
pub use key::Key;
pub use prefstore_state::{
    MemoryStore, SqliteStore, Store, StoreConfiguration, StoreError, open_store,
};
pub use registry::SettingsRegistry;
pub use setting::TypedSetting;
