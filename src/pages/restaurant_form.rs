//! Restaurant Form
//!
//! Create/edit screen for restaurants, each run by one cook.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SelectField, TextField};
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Cook, Resource, Restaurant, RestaurantPayload};
use crate::notify::use_notifier;

/// Cook option label, alias in parentheses when present.
fn cook_label(cook: &Cook) -> String {
    match &cook.alias {
        Some(alias) => format!("{} ({})", cook.name, alias),
        None => cook.name.clone(),
    }
}

#[component]
pub fn RestaurantForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (cooks, set_cooks) = signal(Vec::<Cook>::new());
    let (cooks_loading, set_cooks_loading) = signal(true);

    let (name, set_name) = signal(String::new());
    let (cook_rg, set_cook_rg) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list::<Cook>(Cook::ENDPOINT).await {
                    Ok(rows) => set_cooks.set(rows),
                    Err(err) => notify.error("Failed to load cooks", err.to_string()),
                }
                set_cooks_loading.set(false);
            });
        });
    }

    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<Restaurant>(Restaurant::ENDPOINT, id).await {
                    Ok(restaurant) => {
                        set_name.set(restaurant.name);
                        set_cook_rg.set(restaurant.cook_rg.to_string());
                    }
                    Err(err) => notify.error("Failed to load restaurant", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || cook_rg.get().is_empty() {
            notify.error("Required fields", "Name and cook are required.");
            return;
        }
        let Ok(cook_rg_n) = cook_rg.get().parse::<i64>() else {
            notify.error("Invalid values", "Cook selection must be valid.");
            return;
        };
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let payload = RestaurantPayload {
                name: name.get_untracked().trim().to_string(),
                cook_rg: cook_rg_n,
            };
            let result = match id {
                Some(id) => api.update::<Restaurant, _>(Restaurant::ENDPOINT, id, &payload).await,
                None => api.create::<Restaurant, _>(Restaurant::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Restaurant updated" } else { "Restaurant created" },
                        "The restaurant was saved.",
                    );
                    app.goto(Page::List(Entity::Restaurants));
                }
                Err(err) => notify.error("Failed to save restaurant", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let cook_options = Signal::derive(move || {
        cooks
            .get()
            .iter()
            .map(|cook| (cook.rg.to_string(), cook_label(cook)))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Restaurant" } else { "New Restaurant" }}</h1>
            <form on:submit=on_submit>
                <TextField label="Name" value=name set_value=set_name placeholder="Restaurant name" />
                <SelectField
                    label="Cook"
                    value=cook_rg
                    set_value=set_cook_rg
                    options=cook_options
                    loading=Signal::derive(move || cooks_loading.get())
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Restaurants))
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
