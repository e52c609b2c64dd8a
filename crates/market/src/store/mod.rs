//! Persistence boundary: a local JSON key-value store.
//!
//! State lives in independent named slots, each JSON-encoded. Slots are
//! read once at startup and rewritten in full after every mutation -
//! last-writer-wins, no merge or conflict detection, consistent with
//! single-session usage.

mod json;
mod memory;

pub use json::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known slot names.
pub mod slots {
    /// `Vec<Product>`; absent means "seed the built-in catalog".
    pub const PRODUCTS: &str = "products";
    /// `Vec<Order>`; absent means empty.
    pub const ORDERS: &str = "orders";
    /// Single `User`; absent means signed out. Removed on sign-out.
    pub const CURRENT_USER: &str = "current_user";
    /// `Vec<User>`; the phone-keyed buyer registry. Absent means empty.
    pub const USERS: &str = "users";
}

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot's backing store failed.
    #[error("I/O error on slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// The slot holds data that does not decode as the expected shape.
    #[error("corrupt data in slot '{slot}': {source}")]
    Corrupt {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A store of independent, JSON-encoded slots.
///
/// Implementations are not required to be thread-safe: the engine is
/// single-threaded and applies mutations synchronously.
pub trait Storage {
    /// Read a slot. `Ok(None)` means the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O failure or undecodable content.
    fn read_slot(&self, slot: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Write a slot in full, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O failure.
    fn write_slot(&self, slot: &str, value: &serde_json::Value) -> Result<(), StorageError>;

    /// Remove a slot entirely. Removing an absent slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O failure.
    fn remove_slot(&self, slot: &str) -> Result<(), StorageError>;
}

/// Read and decode a slot into a typed value.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the slot content does not decode
/// as `T`.
pub fn load<T: DeserializeOwned>(
    storage: &dyn Storage,
    slot: &str,
) -> Result<Option<T>, StorageError> {
    match storage.read_slot(slot)? {
        Some(value) => {
            let decoded = serde_json::from_value(value).map_err(|source| {
                StorageError::Corrupt {
                    slot: slot.to_string(),
                    source,
                }
            })?;
            Ok(Some(decoded))
        }
        None => Ok(None),
    }
}

/// Encode and write a typed value into a slot.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or the underlying write fails.
pub fn save<T: Serialize>(storage: &dyn Storage, slot: &str, value: &T) -> Result<(), StorageError> {
    let encoded = serde_json::to_value(value).map_err(|source| StorageError::Corrupt {
        slot: slot.to_string(),
        source,
    })?;
    storage.write_slot(slot, &encoded)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_slot() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<String>> = load(&storage, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let storage = MemoryStorage::new();
        let names = vec!["Premium Rice".to_string(), "Honey Beans".to_string()];
        save(&storage, slots::PRODUCTS, &names).unwrap();

        let loaded: Option<Vec<String>> = load(&storage, slots::PRODUCTS).unwrap();
        assert_eq!(loaded.unwrap(), names);
    }

    #[test]
    fn test_load_corrupt_slot() {
        let storage = MemoryStorage::new();
        save(&storage, "numbers", &vec![1, 2, 3]).unwrap();

        let result: Result<Option<Vec<String>>, _> = load(&storage, "numbers");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = MemoryStorage::new();
        save(&storage, "slot", &"value").unwrap();
        storage.remove_slot("slot").unwrap();
        storage.remove_slot("slot").unwrap();
        assert!(storage.read_slot("slot").unwrap().is_none());
    }
}
