//! Application Context
//!
//! Navigation state shared via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;

/// Domain entity kinds, one per backend collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Entity {
    Employees,
    Cooks,
    Tasters,
    Editors,
    Categories,
    Ingredients,
    Restaurants,
    Recipes,
    Tests,
    Books,
}

impl Entity {
    /// Sidebar order.
    pub const ALL: &'static [Entity] = &[
        Entity::Employees,
        Entity::Cooks,
        Entity::Tasters,
        Entity::Editors,
        Entity::Categories,
        Entity::Ingredients,
        Entity::Restaurants,
        Entity::Recipes,
        Entity::Tests,
        Entity::Books,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Entity::Employees => "Employees",
            Entity::Cooks => "Cooks",
            Entity::Tasters => "Tasters",
            Entity::Editors => "Editors",
            Entity::Categories => "Categories",
            Entity::Ingredients => "Ingredients",
            Entity::Restaurants => "Restaurants",
            Entity::Recipes => "Recipes",
            Entity::Tests => "Tasting Tests",
            Entity::Books => "Books",
        }
    }
}

/// Current screen.
///
/// The edit id is kept as a string so the book's ISBN key and the numeric
/// keys of the other entities share one navigation type.
#[derive(Clone, PartialEq, Debug)]
pub enum Page {
    List(Entity),
    New(Entity),
    Edit(Entity, String),
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Navigate to another screen
    pub fn goto(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context from context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Get the shared API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
