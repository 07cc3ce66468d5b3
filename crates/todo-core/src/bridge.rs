//! Persistence Bridge
//!
//! Mirrors the todo collection into a storage slot and hydrates it once at
//! startup.
//!
//! Lifecycle: `Uninitialized -> Hydrating -> Ready`. Each snapshot write in
//! `Ready` passes through `Writing` and returns to `Ready`.

use crate::codec;
use crate::config::PersistConfig;
use crate::error::BridgeError;
use crate::intent::Intent;
use crate::model::TodoList;
use crate::storage::StorageSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePhase {
    Uninitialized,
    Hydrating,
    Ready,
    Writing,
}

/// What startup hydration found in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// Nothing stored yet
    Empty,
    /// Stored value validated
    Restored(TodoList),
    /// Stored value was malformed and discarded
    Discarded,
}

impl Hydration {
    /// Collection to seed the store with
    pub fn into_list(self) -> TodoList {
        match self {
            Hydration::Restored(list) => list,
            Hydration::Empty | Hydration::Discarded => TodoList::new(),
        }
    }
}

pub struct PersistenceBridge<S: StorageSlot> {
    storage: S,
    config: PersistConfig,
    phase: BridgePhase,
}

impl<S: StorageSlot> PersistenceBridge<S> {
    pub fn new(storage: S, config: PersistConfig) -> Self {
        Self {
            storage,
            config,
            phase: BridgePhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Read and validate the stored snapshot. Allowed once.
    ///
    /// Read failures and malformed data never escape: both end in `Ready`
    /// with an empty collection.
    pub fn hydrate(&mut self) -> Result<Hydration, BridgeError> {
        if self.phase != BridgePhase::Uninitialized {
            return Err(BridgeError::AlreadyHydrated);
        }
        self.phase = BridgePhase::Hydrating;

        let key = self.config.storage_key.as_str();
        let hydration = match self.storage.read(key) {
            Ok(None) => {
                log::info!("[PERSIST] no saved todos under '{}', starting empty", key);
                Hydration::Empty
            }
            Ok(Some(raw)) => match codec::decode(&raw) {
                Ok(list) => {
                    log::info!("[PERSIST] restored {} todos from '{}'", list.len(), key);
                    Hydration::Restored(list)
                }
                Err(e) => {
                    log::warn!("[PERSIST] discarding saved todos under '{}': {}", key, e);
                    Hydration::Discarded
                }
            },
            Err(e) => {
                log::warn!("[PERSIST] could not read '{}': {}", key, e);
                Hydration::Discarded
            }
        };

        self.phase = BridgePhase::Ready;
        Ok(hydration)
    }

    /// Called after the store applied `intent`. Writes a full snapshot of
    /// `list` unless the intent was a hydration replace.
    ///
    /// Returns whether a write happened.
    pub fn observe(&mut self, intent: &Intent, list: &TodoList) -> Result<bool, BridgeError> {
        if !intent.persists() {
            return Ok(false);
        }
        self.write_snapshot(list)?;
        Ok(true)
    }

    /// Overwrite the slot with the full collection
    pub fn write_snapshot(&mut self, list: &TodoList) -> Result<(), BridgeError> {
        if self.phase != BridgePhase::Ready {
            return Err(BridgeError::NotReady(self.phase));
        }
        self.phase = BridgePhase::Writing;
        let result = codec::encode(list)
            .map_err(BridgeError::from)
            .and_then(|raw| {
                self.storage
                    .write(&self.config.storage_key, &raw)
                    .map_err(BridgeError::from)
            });
        self.phase = BridgePhase::Ready;

        if result.is_ok() {
            log::debug!("[PERSIST] saved {} todos", list.len());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::model::TodoId;
    use crate::reducer::apply;
    use crate::storage::{FailingStorage, MemoryStorage};

    fn ready_bridge(storage: &MemoryStorage) -> PersistenceBridge<MemoryStorage> {
        let mut bridge = PersistenceBridge::new(storage.clone(), PersistConfig::default());
        bridge.hydrate().unwrap();
        bridge
    }

    #[test]
    fn test_hydrate_absent_value_is_empty() {
        let mut bridge = PersistenceBridge::new(MemoryStorage::new(), PersistConfig::default());
        assert_eq!(bridge.phase(), BridgePhase::Uninitialized);
        assert_eq!(bridge.hydrate().unwrap(), Hydration::Empty);
        assert_eq!(bridge.phase(), BridgePhase::Ready);
    }

    #[test]
    fn test_hydrate_restores_valid_snapshot() {
        let storage = MemoryStorage::with_value("todos", r#"[{"text":"a","done":true,"createdAt":3}]"#);
        let mut bridge = PersistenceBridge::new(storage, PersistConfig::default());
        let list = bridge.hydrate().unwrap().into_list();
        assert_eq!(list.len(), 1);
        assert!(list.get(TodoId(3)).unwrap().done);
    }

    #[test]
    fn test_hydrate_missing_field_falls_back_to_empty() {
        let storage = MemoryStorage::with_value(
            "todos",
            r#"[{"text":"ok","done":false,"createdAt":1},{"text":"bad","createdAt":2}]"#,
        );
        let mut bridge = PersistenceBridge::new(storage, PersistConfig::default());
        let hydration = bridge.hydrate().unwrap();
        assert_eq!(hydration, Hydration::Discarded);
        assert!(hydration.into_list().is_empty());
    }

    #[test]
    fn test_hydrate_reads_configured_key() {
        let storage = MemoryStorage::with_value("my-todos", r#"[{"text":"a","done":false,"createdAt":1}]"#);
        let mut bridge = PersistenceBridge::new(storage, PersistConfig::with_key("my-todos"));
        assert_eq!(bridge.storage_key(), "my-todos");
        assert_eq!(bridge.hydrate().unwrap().into_list().len(), 1);
    }

    #[test]
    fn test_hydrate_only_once() {
        let storage = MemoryStorage::new();
        let mut bridge = ready_bridge(&storage);
        assert!(matches!(bridge.hydrate(), Err(BridgeError::AlreadyHydrated)));
        assert_eq!(bridge.phase(), BridgePhase::Ready);
    }

    #[test]
    fn test_write_before_hydrate_is_refused() {
        let storage = MemoryStorage::new();
        let mut bridge = PersistenceBridge::new(storage.clone(), PersistConfig::default());
        let result = bridge.write_snapshot(&TodoList::new());
        assert!(matches!(result, Err(BridgeError::NotReady(BridgePhase::Uninitialized))));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_observe_skips_replace_all() {
        let storage = MemoryStorage::new();
        let mut bridge = ready_bridge(&storage);
        let list = apply(&TodoList::new(), Intent::add("a", 1));

        let wrote = bridge.observe(&Intent::ReplaceAll(list.clone()), &list).unwrap();
        assert!(!wrote);
        assert_eq!(storage.write_count(), 0);
        assert_eq!(storage.get("todos"), None);
    }

    #[test]
    fn test_observe_writes_full_snapshot() {
        let storage = MemoryStorage::new();
        let mut bridge = ready_bridge(&storage);
        let list = apply(&TodoList::new(), Intent::add("a", 1));
        let list = apply(&list, Intent::add("b", 2));

        assert!(bridge.observe(&Intent::add("b", 2), &list).unwrap());
        assert_eq!(
            storage.get("todos").as_deref(),
            Some(r#"[{"text":"b","done":false,"createdAt":2},{"text":"a","done":false,"createdAt":1}]"#)
        );
        assert_eq!(bridge.phase(), BridgePhase::Ready);
    }

    #[test]
    fn test_hydrate_read_failure_discards_and_is_ready() {
        let mut bridge = PersistenceBridge::new(FailingStorage, PersistConfig::default());
        let hydration = bridge.hydrate().unwrap();
        assert_eq!(hydration, Hydration::Discarded);
        assert!(hydration.into_list().is_empty());
        assert_eq!(bridge.phase(), BridgePhase::Ready);
    }

    #[test]
    fn test_write_failure_returns_to_ready() {
        let mut bridge = PersistenceBridge::new(FailingStorage, PersistConfig::default());
        bridge.hydrate().unwrap();
        let list = apply(&TodoList::new(), Intent::add("a", 1));

        let result = bridge.write_snapshot(&list);
        assert!(matches!(result, Err(BridgeError::Storage(StorageError::Write(_)))));
        assert_eq!(bridge.phase(), BridgePhase::Ready);

        // The next write is still attempted rather than refused as NotReady
        assert!(matches!(
            bridge.observe(&Intent::ClearAll, &TodoList::new()),
            Err(BridgeError::Storage(_))
        ));
    }
}
