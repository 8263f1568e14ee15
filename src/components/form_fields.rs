//! Form Field Components
//!
//! Labeled input helpers shared by the entity forms.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Select over a loaded catalog; shows a placeholder row until it resolves.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    /// (option value, option label) pairs
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            {move || if loading.get() {
                view! { <p class="select-loading">"Loading..."</p> }.into_any()
            } else {
                view! {
                    <select
                        prop:value=move || value.get()
                        on:change=move |ev| set_value.set(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {options.get().into_iter().map(|(option_value, option_label)| {
                            view! { <option value=option_value>{option_label}</option> }
                        }).collect_view()}
                    </select>
                }.into_any()
            }}
        </div>
    }
}
