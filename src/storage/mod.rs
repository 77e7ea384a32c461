pub mod json_backend;
pub mod memory;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::Result;

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

/// Storage key holding the transaction collection.
pub const TRANSACTIONS_KEY: &str = "accounting_transactions";
/// Storage key holding the category collection.
pub const CATEGORIES_KEY: &str = "accounting_categories";

/// Abstraction over durable string key-value backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// JSON collection access over an optional [`KeyValueStore`].
///
/// A detached store has no backend: reads yield `None` and writes are dropped.
#[derive(Clone, Default)]
pub struct PersistenceStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl PersistenceStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn detached() -> Self {
        Self { backend: None }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Reads and decodes the value stored under `key`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(backend) = &self.backend else {
            debug!(key, "store detached; read yields nothing");
            return Ok(None);
        };
        match backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encodes `value` and stores it under `key`, replacing any previous value.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let Some(backend) = &self.backend else {
            debug!(key, "store detached; dropping write");
            return Ok(());
        };
        let json = serde_json::to_string(value)?;
        backend.set(key, &json)?;
        debug!(key, bytes = json.len(), "collection written");
        Ok(())
    }
}

impl std::fmt::Debug for PersistenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceStore")
            .field("available", &self.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_store_reads_nothing_and_drops_writes() {
        let store = PersistenceStore::detached();
        assert!(!store.is_available());

        store.write(TRANSACTIONS_KEY, &vec![1, 2, 3]).unwrap();
        let read: Option<Vec<i32>> = store.read(TRANSACTIONS_KEY).unwrap();
        assert_eq!(read, None);
    }

    #[test]
    fn write_then_read_round_trips_json() {
        let store = PersistenceStore::in_memory();
        store
            .write(CATEGORIES_KEY, &vec!["Food".to_string()])
            .unwrap();
        let read: Option<Vec<String>> = store.read(CATEGORIES_KEY).unwrap();
        assert_eq!(read, Some(vec!["Food".to_string()]));
    }

    #[test]
    fn corrupt_json_surfaces_serialization_error() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(CATEGORIES_KEY, "not json").unwrap();
        let store = PersistenceStore::new(backend);

        let err = store.read::<Vec<String>>(CATEGORIES_KEY).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::AccountingError::Serialization(_)
        ));
    }
}
