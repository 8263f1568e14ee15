//! Tasting Test Form
//!
//! Create/edit screen for tasting tests: a taster scores a recipe on a date.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SelectField, TextField};
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Recipe, Resource, TastingTest, TastingTestPayload, Taster};
use crate::notify::use_notifier;

#[component]
pub fn TestForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (tasters, set_tasters) = signal(Vec::<Taster>::new());
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (catalogs_loading, set_catalogs_loading) = signal(true);

    let (test_date, set_test_date) = signal(String::new());
    let (score, set_score) = signal(String::new());
    let (taster_rg, set_taster_rg) = signal(String::new());
    let (recipe_id, set_recipe_id) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list::<Taster>(Taster::ENDPOINT).await {
                    Ok(rows) => set_tasters.set(rows),
                    Err(err) => notify.error("Failed to load tasters", err.to_string()),
                }
                match api.list::<Recipe>(Recipe::ENDPOINT).await {
                    Ok(rows) => set_recipes.set(rows),
                    Err(err) => notify.error("Failed to load recipes", err.to_string()),
                }
                set_catalogs_loading.set(false);
            });
        });
    }

    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<TastingTest>(TastingTest::ENDPOINT, id).await {
                    Ok(test) => {
                        set_test_date.set(test.test_date.to_string());
                        set_score.set(test.score.to_string());
                        set_taster_rg.set(test.taster_rg.to_string());
                        set_recipe_id.set(test.recipe_id.to_string());
                    }
                    Err(err) => notify.error("Failed to load tasting test", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if test_date.get().is_empty()
            || score.get().is_empty()
            || taster_rg.get().is_empty()
            || recipe_id.get().is_empty()
        {
            notify.error("Required fields", "All tasting test fields are required.");
            return;
        }
        let parsed = (|| {
            Some(TastingTestPayload {
                test_date: test_date.get_untracked().parse().ok()?,
                score: score.get_untracked().parse().ok()?,
                taster_rg: taster_rg.get_untracked().parse().ok()?,
                recipe_id: recipe_id.get_untracked().parse().ok()?,
            })
        })();
        let Some(payload) = parsed else {
            notify.error("Invalid values", "Date and numeric fields must be valid.");
            return;
        };
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => {
                    api.update::<TastingTest, _>(TastingTest::ENDPOINT, id, &payload).await
                }
                None => api.create::<TastingTest, _>(TastingTest::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Tasting test updated" } else { "Tasting test created" },
                        "The tasting test was saved.",
                    );
                    app.goto(Page::List(Entity::Tests));
                }
                Err(err) => notify.error("Failed to save tasting test", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let taster_options = Signal::derive(move || {
        tasters
            .get()
            .into_iter()
            .map(|taster| (taster.rg.to_string(), taster.name))
            .collect::<Vec<_>>()
    });
    let recipe_options = Signal::derive(move || {
        recipes
            .get()
            .into_iter()
            .map(|recipe| (recipe.id.to_string(), recipe.name))
            .collect::<Vec<_>>()
    });
    let loading = Signal::derive(move || catalogs_loading.get());

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Tasting Test" } else { "New Tasting Test" }}</h1>
            <form on:submit=on_submit>
                <TextField
                    label="Date"
                    value=test_date
                    set_value=set_test_date
                    input_type="date"
                />
                <TextField
                    label="Score (0-10)"
                    value=score
                    set_value=set_score
                    input_type="number"
                />
                <SelectField
                    label="Taster"
                    value=taster_rg
                    set_value=set_taster_rg
                    options=taster_options
                    loading=loading
                />
                <SelectField
                    label="Recipe"
                    value=recipe_id
                    set_value=set_recipe_id
                    options=recipe_options
                    loading=loading
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Tests))
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
