//! Category Form
//!
//! Create/edit screen for recipe categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TextField;
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Category, CategoryPayload, Resource};
use crate::notify::use_notifier;

#[component]
pub fn CategoryForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Editing an existing record populates the form.
    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<Category>(Category::ENDPOINT, id).await {
                    Ok(category) => set_name.set(category.name),
                    Err(err) => notify.error("Failed to load category", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            notify.error("Required fields", "Category name is required.");
            return;
        }
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let payload = CategoryPayload {
                name: name.get_untracked().trim().to_string(),
            };
            let result = match id {
                Some(id) => api.update::<Category, _>(Category::ENDPOINT, id, &payload).await,
                None => api.create::<Category, _>(Category::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Category updated" } else { "Category created" },
                        "The category was saved.",
                    );
                    app.goto(Page::List(Entity::Categories));
                }
                Err(err) => notify.error("Failed to save category", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Category" } else { "New Category" }}</h1>
            <form on:submit=on_submit>
                <TextField label="Name" value=name set_value=set_name placeholder="Category name" />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Categories))
                    >
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
