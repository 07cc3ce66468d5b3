//! Todo Store
//!
//! Owns the collection and routes every intent through the reducer, then
//! through the persistence bridge.

use crate::bridge::{BridgePhase, PersistenceBridge};
use crate::clock::Clock;
use crate::config::PersistConfig;
use crate::intent::Intent;
use crate::model::{Todo, TodoId, TodoList};
use crate::reducer;
use crate::storage::StorageSlot;

pub struct TodoStore<S: StorageSlot, C: Clock> {
    todos: TodoList,
    bridge: PersistenceBridge<S>,
    clock: C,
}

impl<S: StorageSlot, C: Clock> TodoStore<S, C> {
    /// Hydrate from storage and seed the collection with `ReplaceAll`
    pub fn open(storage: S, clock: C, config: PersistConfig) -> Self {
        let mut store = Self {
            todos: TodoList::new(),
            bridge: PersistenceBridge::new(storage, config),
            clock,
        };
        match store.bridge.hydrate() {
            Ok(hydration) => {
                store.dispatch(Intent::ReplaceAll(hydration.into_list()));
            }
            Err(e) => log::warn!("[STORE] hydration skipped: {}", e),
        }
        store
    }

    /// Apply an intent. Returns whether the collection changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let name = intent.name();
        let next = reducer::apply(&self.todos, intent.clone());
        let changed = next != self.todos;
        self.todos = next;

        if let Err(e) = self.bridge.observe(&intent, &self.todos) {
            log::warn!("[STORE] {} applied but not saved: {}", name, e);
        }
        changed
    }

    /// Add a todo stamped with the current time. Returns its id, or `None`
    /// when `text` is blank.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let now = self.clock.now_ms();
        self.dispatch(Intent::add(text, now));
        self.todos.as_slice().first().map(Todo::id)
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn count(&self) -> usize {
        self.todos.len()
    }

    pub fn ongoing(&self) -> Vec<Todo> {
        self.todos.ongoing()
    }

    pub fn completed(&self) -> Vec<Todo> {
        self.todos.completed()
    }

    pub fn phase(&self) -> BridgePhase {
        self.bridge.phase()
    }
}
