//! Storage Slots
//!
//! A durable string key-value slot. `BrowserStorage` wraps
//! `window.localStorage` (wasm32 only), `MemoryStorage` keeps values in
//! process for tests and native builds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Key-value slot the persistence bridge reads from and writes to
pub trait StorageSlot {
    /// Read the raw value at `key`; `Ok(None)` when nothing is stored
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value at `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: StorageSlot + ?Sized> StorageSlot for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process storage.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the bridge wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of writes performed through `StorageSlot::write`
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageSlot for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageSlot for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Slot whose reads and writes always fail, like a disabled or full
/// `localStorage`
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl StorageSlot for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}
