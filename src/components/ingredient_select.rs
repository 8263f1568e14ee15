//! Ingredient Selector
//!
//! Composite editor for a recipe's ingredient line items: pick an ingredient
//! from the catalog, enter quantity and unit, and manage the committed list
//! owned by the recipe form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_api;
use crate::line_items::{self, DraftError, IngredientDraft};
use crate::models::{Ingredient, RecipeIngredient, Resource};
use crate::notify::use_notifier;

#[component]
pub fn IngredientSelect(
    items: ReadSignal<Vec<RecipeIngredient>>,
    set_items: WriteSignal<Vec<RecipeIngredient>>,
) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();

    let (catalog, set_catalog) = signal(Vec::<Ingredient>::new());
    let (catalog_loading, set_catalog_loading) = signal(true);

    // One catalog read on mount.
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list::<Ingredient>(Ingredient::ENDPOINT).await {
                Ok(rows) => set_catalog.set(rows),
                Err(err) => notify.error("Failed to load ingredients", err.to_string()),
            }
            set_catalog_loading.set(false);
        });
    });

    // Draft row
    let (ingredient_id, set_ingredient_id) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());

    let add = move |_| {
        let draft = IngredientDraft {
            ingredient_id: ingredient_id.get(),
            quantity: quantity.get(),
            unit: unit.get(),
        };
        match line_items::commit(&draft, &items.get()) {
            Ok(next) => {
                set_items.set(next);
                set_ingredient_id.set(String::new());
                set_quantity.set(String::new());
                set_unit.set(String::new());
            }
            Err(DraftError::MissingFields) => {
                notify.error(
                    "Required fields",
                    "Ingredient, quantity and unit are all required.",
                );
            }
            Err(DraftError::InvalidNumber) => {
                notify.error("Invalid quantity", "Quantity must be a number.");
            }
            Err(DraftError::AlreadyAdded) => {
                notify.error(
                    "Ingredient already added",
                    "This ingredient is already on the recipe.",
                );
            }
        }
    };

    view! {
        <div class="ingredient-select">
            <div class="ingredient-draft-row">
                <div class="form-field">
                    <label>"Ingredient"</label>
                    {move || if catalog_loading.get() {
                        view! { <p class="select-loading">"Loading ingredients..."</p> }.into_any()
                    } else {
                        view! {
                            <select
                                prop:value=move || ingredient_id.get()
                                on:change=move |ev| set_ingredient_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select an ingredient"</option>
                                {catalog.get().into_iter().map(|ingredient| {
                                    view! {
                                        <option value=ingredient.id.to_string()>
                                            {ingredient.name}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        }.into_any()
                    }}
                </div>
                <div class="form-field">
                    <label>"Quantity"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="e.g. 100"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Unit"</label>
                    <input
                        placeholder="e.g. grams, ml, units"
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <button type="button" class="add-line-item-btn" on:click=add>
                "Add ingredient"
            </button>

            <Show when=move || !items.get().is_empty()>
                <div class="line-item-list">
                    <h4>"Added ingredients"</h4>
                    <ul>
                        {move || items.get().into_iter().enumerate().map(|(index, item)| {
                            let label = format!(
                                "{} - {} {}",
                                line_items::display_name(&catalog.get(), item.ingredient_id),
                                item.quantity,
                                item.unit,
                            );
                            view! {
                                <li>
                                    <span>{label}</span>
                                    <button
                                        type="button"
                                        class="remove-btn"
                                        on:click=move |_| {
                                            set_items.set(line_items::remove_at(
                                                &items.get_untracked(),
                                                index,
                                            ));
                                        }
                                    >
                                        "x"
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
