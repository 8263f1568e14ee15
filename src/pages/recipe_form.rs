//! Recipe Form
//!
//! Create/edit screen for recipes: base fields, category and cook selects,
//! and the composite ingredient editor. The committed line items are sent
//! with the payload, absent when empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{IngredientSelect, SelectField, TextField};
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Category, Cook, Recipe, RecipeIngredient, RecipePayload, Resource};
use crate::notify::use_notifier;

fn cook_label(cook: &Cook) -> String {
    match &cook.alias {
        Some(alias) => format!("{} ({})", cook.name, alias),
        None => cook.name.clone(),
    }
}

#[component]
pub fn RecipeForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (cooks, set_cooks) = signal(Vec::<Cook>::new());
    let (catalogs_loading, set_catalogs_loading) = signal(true);

    let (name, set_name) = signal(String::new());
    let (instructions, set_instructions) = signal(String::new());
    let (created_on, set_created_on) = signal(String::new());
    let (servings, set_servings) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (cook_rg, set_cook_rg) = signal(String::new());
    let (ingredients, set_ingredients) = signal(Vec::<RecipeIngredient>::new());
    let (submitting, set_submitting) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list::<Category>(Category::ENDPOINT).await {
                    Ok(rows) => set_categories.set(rows),
                    Err(err) => notify.error("Failed to load categories", err.to_string()),
                }
                match api.list::<Cook>(Cook::ENDPOINT).await {
                    Ok(rows) => set_cooks.set(rows),
                    Err(err) => notify.error("Failed to load cooks", err.to_string()),
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
                match api.get_one::<Recipe>(Recipe::ENDPOINT, id).await {
                    Ok(recipe) => {
                        set_name.set(recipe.name);
                        set_instructions.set(recipe.instructions);
                        set_created_on.set(recipe.created_on.to_string());
                        set_servings.set(recipe.servings.to_string());
                        set_category_id.set(recipe.category_id.to_string());
                        set_cook_rg.set(recipe.cook_rg.to_string());
                        set_ingredients.set(recipe.ingredients);
                    }
                    Err(err) => notify.error("Failed to load recipe", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty()
            || instructions.get().trim().is_empty()
            || created_on.get().is_empty()
            || servings.get().is_empty()
            || category_id.get().is_empty()
            || cook_rg.get().is_empty()
        {
            notify.error(
                "Required fields",
                "Every field except the ingredients is required.",
            );
            return;
        }
        let parsed = (|| {
            Some(RecipePayload {
                name: name.get_untracked().trim().to_string(),
                instructions: instructions.get_untracked().trim().to_string(),
                created_on: created_on.get_untracked().parse().ok()?,
                servings: servings.get_untracked().parse().ok()?,
                category_id: category_id.get_untracked().parse().ok()?,
                cook_rg: cook_rg.get_untracked().parse().ok()?,
                ingredients: {
                    let items = ingredients.get_untracked();
                    if items.is_empty() { None } else { Some(items) }
                },
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
                Some(id) => api.update::<Recipe, _>(Recipe::ENDPOINT, id, &payload).await,
                None => api.create::<Recipe, _>(Recipe::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Recipe updated" } else { "Recipe created" },
                        "The recipe was saved.",
                    );
                    app.goto(Page::List(Entity::Recipes));
                }
                Err(err) => notify.error("Failed to save recipe", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let category_options = Signal::derive(move || {
        categories
            .get()
            .into_iter()
            .map(|category| (category.id.to_string(), category.name))
            .collect::<Vec<_>>()
    });
    let cook_options = Signal::derive(move || {
        cooks
            .get()
            .iter()
            .map(|cook| (cook.rg.to_string(), cook_label(cook)))
            .collect::<Vec<_>>()
    });
    let loading = Signal::derive(move || catalogs_loading.get());

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Recipe" } else { "New Recipe" }}</h1>
            <form on:submit=on_submit>
                <TextField label="Name" value=name set_value=set_name placeholder="Recipe name" />

                <div class="form-row">
                    <SelectField
                        label="Category"
                        value=category_id
                        set_value=set_category_id
                        options=category_options
                        loading=loading
                    />
                    <SelectField
                        label="Cook"
                        value=cook_rg
                        set_value=set_cook_rg
                        options=cook_options
                        loading=loading
                    />
                </div>

                <div class="form-row">
                    <TextField
                        label="Creation date"
                        value=created_on
                        set_value=set_created_on
                        input_type="date"
                    />
                    <TextField
                        label="Servings"
                        value=servings
                        set_value=set_servings
                        input_type="number"
                    />
                </div>

                <div class="form-field">
                    <label>"Preparation"</label>
                    <textarea
                        placeholder="Describe the preparation steps"
                        prop:value=move || instructions.get()
                        on:input=move |ev| set_instructions.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Ingredients"</label>
                    <IngredientSelect items=ingredients set_items=set_ingredients />
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Recipes))
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
