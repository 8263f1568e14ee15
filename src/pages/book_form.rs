//! Book Form
//!
//! Create/edit screen for books. The ISBN is the record key and is locked
//! when editing. Editing also manages the book's recipe associations through
//! the `/books/{isbn}/recipes/{id}` sub-resource; both calls return the
//! updated book, which refreshes the local list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, SelectField, TextField};
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Book, BookPayload, BookRecipe, Editor, Recipe, Resource};
use crate::notify::use_notifier;

/// Catalog recipes not yet on the book, as select options.
fn available_recipes(catalog: &[Recipe], linked: &[BookRecipe]) -> Vec<(String, String)> {
    catalog
        .iter()
        .filter(|recipe| !linked.iter().any(|on_book| on_book.id == recipe.id))
        .map(|recipe| (recipe.id.to_string(), recipe.name.clone()))
        .collect()
}

#[component]
pub fn BookForm(isbn: Option<String>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let editing = isbn.is_some();

    let (editors, set_editors) = signal(Vec::<Editor>::new());
    let (editors_loading, set_editors_loading) = signal(true);

    let (isbn_value, set_isbn_value) = signal(isbn.clone().unwrap_or_default());
    let (title, set_title) = signal(String::new());
    let (editor_rg, set_editor_rg) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Association state, only exercised when editing.
    let (linked, set_linked) = signal(Vec::<BookRecipe>::new());
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (recipes_loading, set_recipes_loading) = signal(true);
    let (selected_recipe, set_selected_recipe) = signal(String::new());
    let (attaching, set_attaching) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list::<Editor>(Editor::ENDPOINT).await {
                    Ok(rows) => set_editors.set(rows),
                    Err(err) => notify.error("Failed to load editors", err.to_string()),
                }
                set_editors_loading.set(false);
            });
        });
    }

    if let Some(isbn) = isbn.clone() {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let isbn = isbn.clone();
            spawn_local(async move {
                match api.get_one::<Book>(Book::ENDPOINT, &isbn).await {
                    Ok(book) => {
                        set_title.set(book.title);
                        set_editor_rg.set(book.editor_rg.to_string());
                        set_linked.set(book.recipes);
                    }
                    Err(err) => notify.error("Failed to load book", err.to_string()),
                }
                match api.list::<Recipe>(Recipe::ENDPOINT).await {
                    Ok(rows) => set_recipes.set(rows),
                    Err(err) => notify.error("Failed to load recipes", err.to_string()),
                }
                set_recipes_loading.set(false);
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if isbn_value.get().trim().is_empty()
            || title.get().trim().is_empty()
            || editor_rg.get().is_empty()
        {
            notify.error("Required fields", "ISBN, title and editor are required.");
            return;
        }
        let Ok(editor_rg_n) = editor_rg.get().parse::<i64>() else {
            notify.error("Invalid values", "Editor selection must be valid.");
            return;
        };
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let payload = BookPayload {
                isbn: isbn_value.get_untracked().trim().to_string(),
                title: title.get_untracked().trim().to_string(),
                editor_rg: editor_rg_n,
            };
            let result = if editing {
                api.update::<Book, _>(Book::ENDPOINT, &payload.isbn, &payload).await
            } else {
                api.create::<Book, _>(Book::ENDPOINT, &payload).await
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if editing { "Book updated" } else { "Book created" },
                        "The book was saved.",
                    );
                    app.goto(Page::List(Entity::Books));
                }
                Err(err) => notify.error("Failed to save book", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let editor_options = Signal::derive(move || {
        editors
            .get()
            .into_iter()
            .map(|editor| (editor.rg.to_string(), editor.name))
            .collect::<Vec<_>>()
    });
    let recipe_options =
        Signal::derive(move || available_recipes(&recipes.get(), &linked.get()));

    let api_link = api.clone();
    let isbn_link = isbn.clone().unwrap_or_default();
    let add_recipe = move |_| {
        let raw = selected_recipe.get();
        if raw.is_empty() {
            notify.error("Select a recipe", "Pick a recipe to add to the book.");
            return;
        }
        let Ok(recipe_id) = raw.parse::<i64>() else {
            notify.error("Invalid values", "Recipe selection must be valid.");
            return;
        };
        set_attaching.set(true);
        let api = api_link.clone();
        let isbn = isbn_link.clone();
        spawn_local(async move {
            match api.link::<Book>(Book::ENDPOINT, &isbn, "recipes", recipe_id).await {
                Ok(book) => {
                    set_linked.set(book.recipes);
                    set_selected_recipe.set(String::new());
                    notify.success("Recipe added", "The recipe was added to the book.");
                }
                Err(err) => notify.error("Failed to add recipe", err.to_string()),
            }
            set_attaching.set(false);
        });
    };

    let api_rows = api.clone();
    let isbn_rows = isbn.clone().unwrap_or_default();
    let recipe_section = editing.then(|| view! {
        <div class="book-recipes">
            <h2>"Recipes"</h2>
            <div class="book-recipes-add">
                <SelectField
                    label="Add recipe"
                    value=selected_recipe
                    set_value=set_selected_recipe
                    options=recipe_options
                    loading=Signal::derive(move || recipes_loading.get())
                />
                <button
                    type="button"
                    class="add-recipe-btn"
                    disabled=move || attaching.get()
                    on:click=add_recipe
                >
                    {move || if attaching.get() { "Adding..." } else { "Add recipe" }}
                </button>
            </div>
            {move || {
                let entries = linked.get();
                if entries.is_empty() {
                    view! {
                        <p class="empty-list">"No recipes added to this book."</p>
                    }.into_any()
                } else {
                    view! {
                        <ul class="book-recipe-list">
                            {entries.into_iter().map(|entry| {
                                let api = api_rows.clone();
                                let isbn = isbn_rows.clone();
                                view! {
                                    <li>
                                        <span>{entry.name.clone()}</span>
                                        <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                            let api = api.clone();
                                            let isbn = isbn.clone();
                                            spawn_local(async move {
                                                match api
                                                    .unlink::<Book>(
                                                        Book::ENDPOINT,
                                                        &isbn,
                                                        "recipes",
                                                        entry.id,
                                                    )
                                                    .await
                                                {
                                                    Ok(book) => {
                                                        set_linked.set(book.recipes);
                                                        notify.success(
                                                            "Recipe removed",
                                                            "The recipe was removed from the book.",
                                                        );
                                                    }
                                                    Err(err) => notify.error(
                                                        "Failed to remove recipe",
                                                        err.to_string(),
                                                    ),
                                                }
                                            });
                                        }) />
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    });

    view! {
        <div class="page form-page">
            <h1>{if editing { "Edit Book" } else { "New Book" }}</h1>
            <form on:submit=on_submit>
                {move || if editing {
                    view! {
                        <p class="locked-field">{format!("ISBN: {}", isbn_value.get())}</p>
                    }.into_any()
                } else {
                    view! {
                        <TextField
                            label="ISBN"
                            value=isbn_value
                            set_value=set_isbn_value
                            placeholder="e.g. 978-0000000000"
                        />
                    }.into_any()
                }}
                <TextField label="Title" value=title set_value=set_title placeholder="Book title" />
                <SelectField
                    label="Editor"
                    value=editor_rg
                    set_value=set_editor_rg
                    options=editor_options
                    loading=Signal::derive(move || editors_loading.get())
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Books))
                    >
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
            {recipe_section}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn recipe(id: i64, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            instructions: String::new(),
            created_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            servings: 2,
            cook_rg: 1,
            cook_name: "Ana".to_string(),
            category_id: 1,
            category_name: "Mains".to_string(),
            ingredients: Vec::new(),
        }
    }

    fn on_book(id: i64, name: &str) -> BookRecipe {
        BookRecipe {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn linked_recipes_are_excluded_from_the_options() {
        let catalog = vec![recipe(1, "Bread"), recipe(2, "Soup"), recipe(3, "Cake")];
        let linked = vec![on_book(2, "Soup")];

        let options = available_recipes(&catalog, &linked);
        assert_eq!(
            options,
            vec![
                ("1".to_string(), "Bread".to_string()),
                ("3".to_string(), "Cake".to_string()),
            ]
        );
    }

    #[test]
    fn fully_linked_catalog_leaves_no_options() {
        let catalog = vec![recipe(1, "Bread")];
        let linked = vec![on_book(1, "Bread")];
        assert!(available_recipes(&catalog, &linked).is_empty());
    }

    #[test]
    fn empty_book_offers_the_whole_catalog() {
        let catalog = vec![recipe(1, "Bread"), recipe(2, "Soup")];
        assert_eq!(available_recipes(&catalog, &[]).len(), 2);
    }
}
