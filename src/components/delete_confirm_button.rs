//! Delete Confirm Button Component
//!
//! Inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while waiting for confirmation
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
