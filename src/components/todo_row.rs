//! Todo Row Component
//!
//! One todo: checkbox, text or inline editor, edit and delete buttons.

use leptos::prelude::*;
use todo_core::{Intent, Todo};

use crate::context::use_app_context;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id();
    let done = todo.done;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(todo.text.clone());
    let original = StoredValue::new(todo.text.clone());
    let text = todo.text;

    let submit_edit = move || {
        let new_text = draft.get_untracked();
        if new_text.trim().is_empty() {
            // Blank edits are dropped; put the old text back in the editor
            set_draft.set(original.get_value());
        } else {
            ctx.dispatch(Intent::edit(id, new_text));
        }
        set_editing.set(false);
    };

    let toggle = move |_: web_sys::MouseEvent| {
        if editing.get_untracked() { return; }
        ctx.dispatch(Intent::ToggleDone(id));
    };

    view! {
        <div class=move || if done { "todo-row done" } else { "todo-row" }>
            <div class="todo-main" on:click=toggle>
                <input
                    type="checkbox"
                    prop:checked=done
                    disabled=move || editing.get()
                />
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            name="editTodo"
                            class="todo-edit"
                            prop:value=move || draft.get()
                            on:click=|ev| ev.stop_propagation()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" { submit_edit(); }
                            }
                        />
                    }.into_any()
                } else {
                    view! { <span class="todo-text">{text.clone()}</span> }.into_any()
                }}
            </div>

            <div class="todo-actions">
                <button
                    class=move || if editing.get() { "edit-btn active" } else { "edit-btn" }
                    on:click=move |_| {
                        if editing.get_untracked() {
                            submit_edit();
                        } else {
                            set_editing.set(true);
                        }
                    }
                >
                    {move || if editing.get() { "✓" } else { "✎" }}
                </button>
                <button class="delete-btn" on:click=move |_| ctx.dispatch(Intent::DeleteItem(id))>"×"</button>
            </div>
        </div>
    }
}
