//! New Todo Form Component
//!
//! Text input plus submit button for adding todos.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }

        if ctx.add(text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                name="todo"
                placeholder="Add todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"+"</button>
        </form>
    }
}
