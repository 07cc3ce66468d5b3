//! Application Context
//!
//! Owns the todo store and exposes dispatch to components via Leptos context.

use leptos::prelude::*;
use todo_core::{Intent, PersistConfig, StorageSlot, SystemClock, TodoStore};

use crate::store::{AppStateStoreFields, AppStore};

/// Todo store as wired in the browser
pub type AppTodoStore = TodoStore<Box<dyn StorageSlot>, SystemClock>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive view state (read by components)
    pub state: AppStore,
    /// Owning store; `None` until hydrated
    core: StoredValue<Option<AppTodoStore>, LocalStorage>,
}

impl AppContext {
    pub fn new(state: AppStore) -> Self {
        Self {
            state,
            core: StoredValue::new_local(None),
        }
    }

    /// Read saved todos once and publish them to the view
    pub fn hydrate(&self) {
        let already_open = self.core.with_value(|core| core.is_some());
        if already_open {
            log::warn!("[APP] hydrate called twice, ignoring");
            return;
        }

        let core = AppTodoStore::open(open_slot(), SystemClock, PersistConfig::default());
        log::info!("[APP] loaded {} todos", core.count());
        *self.state.todos().write() = core.todos().clone();
        self.core.set_value(Some(core));
        *self.state.initializing().write() = false;
    }

    /// Apply an intent and refresh the view copy
    pub fn dispatch(&self, intent: Intent) {
        let updated = self
            .core
            .try_update_value(|core| {
                core.as_mut().map(|core| {
                    core.dispatch(intent);
                    core.todos().clone()
                })
            })
            .flatten();

        match updated {
            Some(todos) => *self.state.todos().write() = todos,
            None => log::warn!("[APP] dispatch before hydration, dropped"),
        }
    }

    /// Add a todo from user input. Returns false for blank text.
    pub fn add(&self, text: String) -> bool {
        let updated = self
            .core
            .try_update_value(|core| {
                core.as_mut().and_then(|core| {
                    core.add(text).map(|_| core.todos().clone())
                })
            })
            .flatten();

        match updated {
            Some(todos) => {
                *self.state.todos().write() = todos;
                true
            }
            None => false,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(target_arch = "wasm32")]
fn open_slot() -> Box<dyn StorageSlot> {
    match todo_core::BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[APP] {}, todos will not survive a reload", e);
            Box::new(todo_core::MemoryStorage::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_slot() -> Box<dyn StorageSlot> {
    Box::new(todo_core::MemoryStorage::new())
}
