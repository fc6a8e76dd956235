// ============================================================================
// STORAGE - Abstracción clave/valor sobre sessionStorage
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::error::StorageError;

/// Almacén clave/valor síncrono con la semántica de Web Storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// window.sessionStorage (vida de la pestaña)
pub struct BrowserSessionStorage {
    storage: Storage,
}

impl BrowserSessionStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Read {
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|_| StorageError::Remove {
            key: key.to_string(),
        })
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    store.set_item(key, &json)
}

/// Ok(None) si la clave no existe; Err(Deserialize) si existe pero no parsea
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get_item(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Deserialize),
        None => Ok(None),
    }
}

pub fn remove_key(store: &dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
    store.remove_item(key)
}

#[cfg(test)]
pub use memory::MemoryStorage;


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_load_missing_key_is_none() {
        let store = MemoryStorage::new();
        let loaded: Option<Vec<u32>> = load_json(&store, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::new();
        let mut value = BTreeMap::new();
        value.insert("a".to_string(), 1u32);
        save_json(&store, "k", &value).unwrap();
        assert_eq!(store.raw("k").as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(store.write_count(), 1);
        let loaded: Option<BTreeMap<String, u32>> = load_json(&store, "k").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_corrupt_json_is_deserialize_error() {
        let store = MemoryStorage::with_item("k", "{not json");
        let err = load_json::<Vec<u32>>(&store, "k").unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_remove_key() {
        let store = MemoryStorage::with_item("k", "1");
        remove_key(&store, "k").unwrap();
        assert!(store.raw("k").is_none());
        // Borrar una clave inexistente no es error
        remove_key(&store, "k").unwrap();
    }
}
