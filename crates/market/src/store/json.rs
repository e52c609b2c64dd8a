//! File-backed JSON slot storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Slot storage backed by one pretty-printed JSON file per slot.
///
/// Files live directly under the data directory as `<slot>.json`. Writes
/// replace the file in full.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            slot: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let path = self.slot_path(slot);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    slot: slot.to_string(),
                    source,
                });
            }
        };

        let value = serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
            slot: slot.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    fn write_slot(&self, slot: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(value).map_err(|source| StorageError::Corrupt {
            slot: slot.to_string(),
            source,
        })?;
        fs::write(self.slot_path(slot), text).map_err(|source| StorageError::Io {
            slot: slot.to_string(),
            source,
        })
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::{load, save};

    #[test]
    fn test_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).unwrap();

        save(&storage, "greeting", &"hello").unwrap();
        assert!(dir.path().join("greeting.json").exists());

        let loaded: Option<String> = load(&storage, "greeting").unwrap();
        assert_eq!(loaded.as_deref(), Some("hello"));
    }

    #[test]
    fn test_absent_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).unwrap();
        assert!(storage.read_slot("nothing").unwrap().is_none());
    }

    #[test]
    fn test_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).unwrap();

        save(&storage, "slot", &42).unwrap();
        storage.remove_slot("slot").unwrap();
        assert!(!dir.path().join("slot.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("slot.json"), "{not json").unwrap();
        assert!(matches!(
            storage.read_slot("slot"),
            Err(StorageError::Corrupt { .. })
        ));
    }
}
