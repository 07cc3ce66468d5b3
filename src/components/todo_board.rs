//! Todo Board Component
//!
//! Loading skeleton, empty state, or the grouped list with a delete-all
//! control and a count footer.

use leptos::prelude::*;
use todo_core::Intent;

use crate::components::{DeleteConfirmButton, TodoSection};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Placeholder rows shown while saved todos are loading
const SKELETON_ROWS: usize = 4;

#[component]
pub fn TodoBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let ongoing = Signal::derive(move || store.todos().read().ongoing());
    let completed = Signal::derive(move || store.todos().read().completed());
    let is_empty = move || store.todos().read().is_empty();
    let footer = move || {
        let todos = store.todos().read();
        format!("{} todos, {} done", todos.len(), todos.done_count())
    };

    view! {
        <div class="todo-board">
            {move || if store.initializing().get() {
                view! {
                    <div class="todo-skeleton">
                        {(0..SKELETON_ROWS).map(|_| view! { <div class="skeleton-row"></div> }).collect_view()}
                    </div>
                }.into_any()
            } else if is_empty() {
                view! { <p class="empty-state">"No todos found."</p> }.into_any()
            } else {
                view! {
                    <DeleteConfirmButton
                        button_class="clear-all-btn"
                        label="Delete all todos"
                        prompt="Delete all?"
                        on_confirm=move |_| ctx.dispatch(Intent::ClearAll)
                    />
                    <TodoSection title="Ongoing" todos=ongoing />
                    <TodoSection title="Completed" todos=completed />
                    <p class="todo-count">{footer}</p>
                }.into_any()
            }}
        </div>
    }
}
