//! Todo Section Component
//!
//! Titled group of todo rows (Ongoing / Completed). Hidden when empty.

use leptos::prelude::*;
use todo_core::Todo;

use crate::components::TodoRow;

#[component]
pub fn TodoSection(
    #[prop(into)] title: String,
    #[prop(into)] todos: Signal<Vec<Todo>>,
) -> impl IntoView {
    view! {
        <Show when=move || !todos.get().is_empty()>
            <section class="todo-section">
                <h2>{title.clone()}</h2>
                <For
                    each=move || todos.get()
                    // Text and flag are part of the key so edits re-render the row
                    key=|todo| (todo.id(), todo.text.clone(), todo.done)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </section>
        </Show>
    }
}
