//! Key-Value Stores

use std::{collections::BTreeMap, sync::Mutex};

use super::PersistenceError;

/// Synchronous key-value storage, the durable layer under snapshot
/// collections and local documents.
///
/// Keys are flat strings; namespaced keys use `:` separators, e.g.
/// `dishes:1718000000000`.
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError>;

    /// Delete a key. Deleting a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), PersistenceError>;

    /// Scan all keys starting with `prefix`. Returns pairs sorted by key.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, PersistenceError>;
}

/// Process-local key-value store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>>, PersistenceError> {
        self.entries.lock().map_err(|_poisoned| PersistenceError::Poisoned)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        self.entries()?.insert(key.to_owned(), value.to_vec());

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        self.entries()?.remove(key);

        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, PersistenceError> {
        Ok(self
            .entries()?
            .range(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_then_get_returns_value() -> TestResult {
        let kv = MemoryKeyValueStore::new();

        kv.set("tutorials", b"[]")?;

        assert_eq!(kv.get("tutorials")?, Some(b"[]".to_vec()));
        assert_eq!(kv.get("lessons")?, None);

        Ok(())
    }

    #[test]
    fn delete_missing_key_succeeds() -> TestResult {
        let kv = MemoryKeyValueStore::new();

        kv.delete("blocks")?;

        Ok(())
    }

    #[test]
    fn scan_returns_only_prefixed_keys_in_order() -> TestResult {
        let kv = MemoryKeyValueStore::new();

        kv.set("dishes:2", b"b")?;
        kv.set("dishes:1", b"a")?;
        kv.set("dishesx", b"x")?;
        kv.set("users:1", b"u")?;

        let keys: Vec<String> = kv
            .scan("dishes:")?
            .into_iter()
            .map(|(key, _)| key)
            .collect();

        assert_eq!(keys, vec!["dishes:1".to_string(), "dishes:2".to_string()]);

        Ok(())
    }
}
