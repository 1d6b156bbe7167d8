//! Durable Storage
//!
//! The whole week is written as one JSON document under a single key on
//! every mutation and read back once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::week::WeekStore;

/// Current on-disk format
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not read saved data: {0}")]
    Read(String),
    #[error("could not save: {0}")]
    Write(String),
    #[error("saved data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("saved data has format version {0}, newer than this app understands")]
    UnsupportedVersion(u64),
    #[error("saving is off because the saved data could not be loaded")]
    ReadOnly,
}

/// String key-value backend
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage {
    read_only: bool,
}

impl BrowserStorage {
    /// Refuses writes, leaving whatever is saved untouched
    pub fn read_only() -> Self {
        Self { read_only: true }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        // Fails with QuotaExceededError when the origin's budget is used up
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory backend that counts writes
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    days: &'a WeekStore,
}

#[derive(Deserialize)]
struct VersionedDocument {
    days: WeekStore,
}

/// Loads and saves the week under one key
#[derive(Debug, Clone, Copy)]
pub struct Persistence<S> {
    backend: S,
    key: &'static str,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(backend: S, key: &'static str) -> Self {
        Self { backend, key }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Saved week, or an empty one when nothing has been saved yet
    pub fn load(&self) -> Result<WeekStore, StorageError> {
        let Some(raw) = self.backend.read(self.key)? else {
            return Ok(WeekStore::new());
        };
        decode(&raw)
    }

    pub fn save(&self, week: &WeekStore) -> Result<(), StorageError> {
        let raw = encode(week)?;
        self.backend.write(self.key, &raw)
    }
}

pub fn encode(week: &WeekStore) -> Result<String, StorageError> {
    let document = DocumentRef { version: FORMAT_VERSION, days: week };
    Ok(serde_json::to_string(&document)?)
}

/// Parse a saved document. Documents without a `version` field predate
/// versioning and hold the day map at the top level.
pub fn decode(raw: &str) -> Result<WeekStore, StorageError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value.get("version").and_then(serde_json::Value::as_u64) {
        Some(version) if version > u64::from(FORMAT_VERSION) => Err(StorageError::UnsupportedVersion(version)),
        Some(_) => {
            let document: VersionedDocument = serde_json::from_value(value)?;
            Ok(document.days)
        }
        None => {
            let days = serde_json::from_value(value)?;
            log::info!("[STORAGE] migrated unversioned save to format {}", FORMAT_VERSION);
            Ok(days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardId, DayKey};
    use pretty_assertions::assert_eq;

    const KEY: &str = "planner";

    fn sample() -> WeekStore {
        let mut week = WeekStore::new();
        let day: DayKey = "2024-06-03".parse().unwrap();
        let card = week.add_card(day);
        week.rename_card(&card, "Errands");
        week.add_item(&card, "pay bills");
        week.add_item(&card, "buy milk");
        week
    }

    #[test]
    fn test_load_without_saved_data() {
        let persistence = Persistence::new(MemoryStorage::default(), KEY);
        assert_eq!(persistence.load().unwrap(), WeekStore::new());
    }

    #[test]
    fn test_save_then_load() {
        let persistence = Persistence::new(MemoryStorage::default(), KEY);
        let week = sample();
        persistence.save(&week).unwrap();
        assert_eq!(persistence.backend().writes(), 1);
        assert_eq!(persistence.load().unwrap(), week);
    }

    #[test]
    fn test_document_layout() {
        let mut week = WeekStore::new();
        let day: DayKey = "2024-06-03".parse().unwrap();
        let mut card = crate::models::CardRecord::new();
        card.id = CardId::from("c1");
        week.set_cards(day, vec![card]);

        let value: serde_json::Value = serde_json::from_str(&encode(&week).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "days": { "2024-06-03": [ { "id": "c1", "title": "", "items": [] } ] }
            })
        );
    }

    #[test]
    fn test_legacy_document_is_migrated() {
        let legacy = r#"{"2024-06-03":[{"id":"c1","title":"Untitled Tasks","todos":[{"id":"i1","text":"buy milk","completed":false}]}]}"#;
        let persistence = Persistence::new(MemoryStorage::with_entry(KEY, legacy), KEY);
        let week = persistence.load().unwrap();
        assert_eq!(week.item_count(), 1);
        assert_eq!(week.card(&CardId::from("c1")).unwrap().items[0].text, "buy milk");
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let raw = r#"{"version":9,"days":{}}"#;
        assert!(matches!(decode(raw), Err(StorageError::UnsupportedVersion(9))));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        assert!(matches!(decode("{not json"), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode("[1, 2, 3]"), Err(StorageError::Corrupt(_))));
    }
}
