//! Ingredient Form
//!
//! Create/edit screen for catalog ingredients.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TextField;
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Ingredient, IngredientPayload, Resource};
use crate::notify::use_notifier;

#[component]
pub fn IngredientForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<Ingredient>(Ingredient::ENDPOINT, id).await {
                    Ok(ingredient) => {
                        set_name.set(ingredient.name);
                        set_description.set(ingredient.description);
                    }
                    Err(err) => notify.error("Failed to load ingredient", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || description.get().trim().is_empty() {
            notify.error("Required fields", "Name and description are required.");
            return;
        }
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let payload = IngredientPayload {
                name: name.get_untracked().trim().to_string(),
                description: description.get_untracked().trim().to_string(),
            };
            let result = match id {
                Some(id) => api.update::<Ingredient, _>(Ingredient::ENDPOINT, id, &payload).await,
                None => api.create::<Ingredient, _>(Ingredient::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Ingredient updated" } else { "Ingredient created" },
                        "The ingredient was saved.",
                    );
                    app.goto(Page::List(Entity::Ingredients));
                }
                Err(err) => notify.error("Failed to save ingredient", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Ingredient" } else { "New Ingredient" }}</h1>
            <form on:submit=on_submit>
                <TextField label="Name" value=name set_value=set_name placeholder="Ingredient name" />
                <TextField
                    label="Description"
                    value=description
                    set_value=set_description
                    placeholder="Short description"
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Ingredients))
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
