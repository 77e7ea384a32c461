use std::{collections::HashMap, sync::RwLock};

use crate::errors::{AccountingError, Result};

use super::KeyValueStore;

/// Process-local key-value store, handy for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AccountingError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AccountingError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
