use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use rusqlite::{OptionalExtension, types::ValueRef};

use crate::{
    backends::StoreConfiguration,
    store::{Store, StoreError},
};

/// A durable [`Store`] persisted in a single SQLite file.
///
/// Cloning the handle shares the underlying connection.
///
/// Values written by other programs are read back as raw bytes whatever their column type:
/// TEXT as its UTF-8 bytes, INTEGER and REAL as their decimal text.
#[derive(Clone)]
pub struct SqliteStore(Arc<Mutex<rusqlite::Connection>>);

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish()
    }
}

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl SqliteStore {
    /// Open (creating if needed) the SQLite database described by `configuration`.
    pub fn open(configuration: StoreConfiguration) -> Result<Self, StoreError> {
        let StoreConfiguration::Sqlite { file_path } = configuration else {
            return Err(StoreError::UnsupportedConfiguration(configuration));
        };
        log::debug!("Opening settings database at {}", file_path.display());

        let mut db = rusqlite::Connection::open(&file_path)?;

        // Other processes may hold the write lock
        db.busy_timeout(BUSY_TIMEOUT)?;

        // Set WAL mode for better concurrency
        db.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;

        let transaction = db.transaction()?;
        transaction.execute(
            "CREATE TABLE IF NOT EXISTS settings (key TEXT PRIMARY KEY, value BLOB NOT NULL);",
            [],
        )?;
        transaction.commit()?;

        Ok(SqliteStore(Arc::new(Mutex::new(db))))
    }
}

fn raw_bytes(value: ValueRef<'_>) -> Vec<u8> {
    match value {
        ValueRef::Blob(bytes) | ValueRef::Text(bytes) => bytes.to_vec(),
        ValueRef::Integer(i) => i.to_string().into_bytes(),
        ValueRef::Real(f) => f.to_string().into_bytes(),
        ValueRef::Null => Vec::new(),
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let conn = self.0.lock().expect("Mutex should not be poisoned");
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                rusqlite::params![key],
                |row| Ok(raw_bytes(row.get_ref(0)?)),
            )
            .optional()?;

        Ok(value)
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let conn = self.0.lock().expect("Mutex should not be poisoned");
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM settings WHERE key = ?1)",
            rusqlite::params![key],
            |row| row.get::<_, bool>(0),
        )?;

        Ok(exists)
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut conn = self.0.lock().expect("Mutex should not be poisoned");
        let transaction = conn.transaction()?;

        transaction.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;

        transaction.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.0.lock().expect("Mutex should not be poisoned");
        let transaction = conn.transaction()?;

        transaction.execute(
            "DELETE FROM settings WHERE key = ?1",
            rusqlite::params![key],
        )?;

        transaction.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_in(dir: &tempfile::TempDir) -> SqliteStore {
        SqliteStore::open(StoreConfiguration::Sqlite {
            file_path: dir.path().join("settings.sqlite"),
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_memory_configuration() {
        let result = SqliteStore::open(StoreConfiguration::Memory);
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedConfiguration(StoreConfiguration::Memory))
        ));
    }

    #[test]
    fn test_get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir);

        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", b"one".to_vec()).unwrap();
        store.set("a", b"two".to_vec()).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(b"two".to_vec()));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = open_in(&dir);
            store.set("persisted", vec![0xde, 0xad]).unwrap();
        }

        let store = open_in(&dir);
        assert_eq!(store.get("persisted").unwrap(), Some(vec![0xde, 0xad]));
        assert!(store.contains("persisted").unwrap());
    }

    #[test]
    fn test_reads_values_of_any_column_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir);
        let raw = rusqlite::Connection::open(dir.path().join("settings.sqlite")).unwrap();

        raw.execute(
            "INSERT INTO settings (key, value) VALUES ('text', 'garbage'), ('int', 42), ('real', 1.5)",
            [],
        )
        .unwrap();

        assert_eq!(store.get("text").unwrap(), Some(b"garbage".to_vec()));
        assert_eq!(store.get("int").unwrap(), Some(b"42".to_vec()));
        assert_eq!(store.get("real").unwrap(), Some(b"1.5".to_vec()));
        for key in ["text", "int", "real"] {
            assert!(store.contains(key).unwrap());
        }
        assert!(!store.contains("missing").unwrap());
    }

    #[test]
    fn test_busy_timeout_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir);

        let timeout: i64 = store
            .0
            .lock()
            .unwrap()
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);
    }

    #[test]
    fn test_clones_share_connection() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir);
        let other = store.clone();

        store.set("shared", vec![1]).unwrap();
        assert_eq!(other.get("shared").unwrap(), Some(vec![1]));
    }
}
