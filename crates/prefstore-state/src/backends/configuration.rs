use std::path::PathBuf;

/// Configuration for the store backing a set of settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfiguration {
    /// Process-local storage. Nothing is persisted once the store is dropped.
    Memory,

    /// SQLite storage, persisted across process restarts.
    Sqlite {
        /// The file path to the SQLite database. It is created if it doesn't exist. Settings for
        /// different users should be stored in different files.
        file_path: PathBuf,
    },
}
