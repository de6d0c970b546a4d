//! Owned-Set Persistence
//!
//! Mirrors the owned set into a single localStorage slot as a JSON array.
//! Reads fail soft: anything unreadable counts as "nothing saved yet".

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;
use thiserror::Error;

use crate::owned::OwnedSet;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String slot storage (browser localStorage or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, or nothing when the browser withholds it
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Resolve the page's localStorage; disabled or blocked storage yields a no-op slot
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, owned list will not persist");
        }
        Self { storage }
    }

    pub fn unavailable() -> Self {
        Self { storage: None }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or_else(|| StorageError::Write {
            key: key.to_string(),
            reason: "localStorage unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Shared in-memory map; clones see the same slots
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load/save/toggle of the owned set against one storage slot
#[derive(Debug, Clone)]
pub struct OwnedStore<S> {
    storage: S,
    key: &'static str,
}

impl OwnedStore<BrowserStorage> {
    pub fn browser(key: &'static str) -> Self {
        Self::new(BrowserStorage::local(), key)
    }
}

impl<S: KeyValueStore> OwnedStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn load(&self) -> OwnedSet {
        let Some(raw) = self.storage.get(self.key) else {
            return OwnedSet::new();
        };
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => ids.into_iter().filter(|id| *id > 0).collect(),
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "ignoring unreadable owned list");
                OwnedSet::new()
            }
        }
    }

    pub fn save(&self, owned: &OwnedSet) {
        let raw = match serde_json::to_string(owned) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize owned list");
                return;
            }
        };
        if let Err(e) = self.storage.set(self.key, &raw) {
            tracing::warn!(error = %e, "failed to persist owned list");
        }
    }

    /// Flip membership of `id` and persist the result
    pub fn toggle(&self, owned: &OwnedSet, id: u32) -> OwnedSet {
        let next = owned.toggled(id);
        self.save(&next);
        next
    }
}
