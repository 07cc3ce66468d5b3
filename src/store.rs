//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the view's
//! copy of the todo collection; the owning `TodoStore` lives in `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current todo collection, newest first
    pub todos: TodoList,
    /// True until the saved todos have been read back
    pub initializing: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            initializing: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
