//! Application Shell
//!
//! Provides the shared context (navigation, API client, notifier) and swaps
//! the main pane between the list and form screens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{Sidebar, Toaster};
use crate::context::{AppContext, Entity, Page};
use crate::models::{
    Book, Category, Cook, Editor, Employee, Ingredient, Recipe, Restaurant, Taster, TastingTest,
};
use crate::notify::Notifier;
use crate::pages::{
    list_page, BookForm, CategoryForm, CookForm, EditorForm, EmployeeForm, IngredientForm,
    RecipeForm, RestaurantForm, TasterForm, TestForm,
};

fn render_list(entity: Entity) -> AnyView {
    match entity {
        Entity::Employees => list_page::<Employee>(entity).into_any(),
        Entity::Cooks => list_page::<Cook>(entity).into_any(),
        Entity::Tasters => list_page::<Taster>(entity).into_any(),
        Entity::Editors => list_page::<Editor>(entity).into_any(),
        Entity::Categories => list_page::<Category>(entity).into_any(),
        Entity::Ingredients => list_page::<Ingredient>(entity).into_any(),
        Entity::Restaurants => list_page::<Restaurant>(entity).into_any(),
        Entity::Recipes => list_page::<Recipe>(entity).into_any(),
        Entity::Tests => list_page::<TastingTest>(entity).into_any(),
        Entity::Books => list_page::<Book>(entity).into_any(),
    }
}

/// Edit key for the numerically keyed entities. Books keep their raw ISBN
/// and never go through the parse.
fn numeric_key(entity: Entity, id: Option<&str>) -> Result<Option<i64>, String> {
    match id {
        Some(raw) if entity != Entity::Books => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("'{raw}' is not a valid id.")),
        _ => Ok(None),
    }
}

/// The form screen for one entity. `id` is `None` for a blank create form.
fn render_form(entity: Entity, id: Option<String>, notify: Notifier) -> AnyView {
    let parsed = match numeric_key(entity, id.as_deref()) {
        Ok(parsed) => parsed,
        Err(message) => {
            // This runs inside the page render closure, so the toast is
            // pushed from a task instead of written mid-render.
            spawn_local(async move {
                notify.error("Invalid record id", message);
            });
            return render_list(entity);
        }
    };
    match entity {
        Entity::Employees => view! { <EmployeeForm id=parsed /> }.into_any(),
        Entity::Cooks => view! { <CookForm id=parsed /> }.into_any(),
        Entity::Tasters => view! { <TasterForm id=parsed /> }.into_any(),
        Entity::Editors => view! { <EditorForm id=parsed /> }.into_any(),
        Entity::Categories => view! { <CategoryForm id=parsed /> }.into_any(),
        Entity::Ingredients => view! { <IngredientForm id=parsed /> }.into_any(),
        Entity::Restaurants => view! { <RestaurantForm id=parsed /> }.into_any(),
        Entity::Recipes => view! { <RecipeForm id=parsed /> }.into_any(),
        Entity::Tests => view! { <TestForm id=parsed /> }.into_any(),
        Entity::Books => view! { <BookForm isbn=id /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = signal(Page::List(Entity::Recipes));
    let notify = Notifier::default();

    provide_context(AppContext::new(page));
    provide_context(ApiClient::from_env());
    provide_context(notify);

    let (page, _) = page;

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="content">
                {move || match page.get() {
                    Page::List(entity) => render_list(entity),
                    Page::New(entity) => render_form(entity, None, notify),
                    Page::Edit(entity, id) => render_form(entity, Some(id), notify),
                }}
            </main>
            <Toaster />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_entities_parse_their_edit_key() {
        assert_eq!(numeric_key(Entity::Recipes, Some("7")), Ok(Some(7)));
        assert_eq!(numeric_key(Entity::Employees, None), Ok(None));
    }

    #[test]
    fn bad_numeric_key_reports_the_raw_value() {
        let err = numeric_key(Entity::Categories, Some("abc")).unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn isbn_keys_are_never_parsed() {
        assert_eq!(numeric_key(Entity::Books, Some("978-0000000000")), Ok(None));
    }
}
