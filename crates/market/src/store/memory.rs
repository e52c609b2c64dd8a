//! In-memory slot storage for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{Storage, StorageError};

/// Slot storage held entirely in memory.
///
/// Used by unit tests; keeps the same semantics as
/// [`JsonFileStorage`](super::JsonFileStorage) without touching the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.clone());
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}
