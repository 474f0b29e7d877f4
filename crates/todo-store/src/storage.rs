//! Durable Storage
//!
//! Abstract key-value capability plus the persisted list format.
//! The whole list is stored under one key as a JSON array of strings.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{CodecError, StorageError};
use crate::item::TodoItem;

/// Key-value storage that survives reloads
///
/// Values are overwritten in full; there is no patching.
pub trait DurableStore {
    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: DurableStore + ?Sized> DurableStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-memory storage
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make every following write fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl DurableStore for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that cannot hold anything
///
/// Reads find nothing and every write fails with `StorageError::Unavailable`,
/// so a store built on it keeps its notice up instead of pretending to save.
#[derive(Debug, Clone)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl DurableStore for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// Serialize item texts in order
pub fn encode_list(items: &[TodoItem]) -> Result<String, CodecError> {
    let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
    serde_json::to_string(&texts).map_err(CodecError::Encode)
}

/// Parse a persisted list; anything but an array of strings is rejected
pub fn decode_list(text: &str) -> Result<Vec<String>, CodecError> {
    serde_json::from_str::<Option<Vec<String>>>(text)
        .map_err(CodecError::Malformed)?
        .ok_or(CodecError::Null)
}
