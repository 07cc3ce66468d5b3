//! Todo Frontend App
//!
//! Composition root: creates the state, provides context, hydrates on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoBoard};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = Store::new(AppState::new());
    let ctx = AppContext::new(state);

    // Provide context to all children
    provide_context(state);
    provide_context(ctx);

    // Load saved todos once after mount
    Effect::new(move |_| ctx.hydrate());

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <NewTodoForm />
            <TodoBoard />
        </main>
    }
}
