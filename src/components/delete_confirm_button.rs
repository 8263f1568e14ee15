//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click arms the confirmation, the second
//! fires the callback. No modal, cancel resets the button.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_armed.set(false)>
                        "No"
                    </button>
                </span>
            }.into_any()
        } else {
            view! {
                <button class="delete-btn" on:click=move |_| set_armed.set(true)>
                    "Delete"
                </button>
            }.into_any()
        }}
    }
}
