//! Domain Models
//!
//! Wire structures matching the recipe backend's JSON, plus the [`Resource`]
//! trait tying each entity to its collection endpoint.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A REST collection entity.
pub trait Resource: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Collection path under the API base URL, e.g. `/recipes`.
    const ENDPOINT: &'static str;
    /// Plural display name for headers and notifications.
    const LABEL: &'static str;
    /// Singular display name.
    const LABEL_ONE: &'static str;

    type Id: Clone + PartialEq + Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub rg: i64,
    pub name: String,
    pub admission_date: NaiveDate,
    pub salary: f64,
}

impl Resource for Employee {
    const ENDPOINT: &'static str = "/employees";
    const LABEL: &'static str = "Employees";
    const LABEL_ONE: &'static str = "Employee";
    type Id = i64;
    fn id(&self) -> i64 {
        self.rg
    }
}

/// Cook role; `rg` references an existing employee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cook {
    pub rg: i64,
    pub name: String,
    pub alias: Option<String>,
    pub monthly_recipe_goal: i32,
    pub initial_deadline_days: i32,
    pub contract_date: Option<NaiveDate>,
}

impl Resource for Cook {
    const ENDPOINT: &'static str = "/cooks";
    const LABEL: &'static str = "Cooks";
    const LABEL_ONE: &'static str = "Cook";
    type Id = i64;
    fn id(&self) -> i64 {
        self.rg
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taster {
    pub rg: i64,
    pub name: String,
    pub contract_date: Option<NaiveDate>,
}

impl Resource for Taster {
    const ENDPOINT: &'static str = "/tasters";
    const LABEL: &'static str = "Tasters";
    const LABEL_ONE: &'static str = "Taster";
    type Id = i64;
    fn id(&self) -> i64 {
        self.rg
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    pub rg: i64,
    pub name: String,
    pub contract_date: Option<NaiveDate>,
}

impl Resource for Editor {
    const ENDPOINT: &'static str = "/editors";
    const LABEL: &'static str = "Editors";
    const LABEL_ONE: &'static str = "Editor";
    type Id = i64;
    fn id(&self) -> i64 {
        self.rg
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Resource for Category {
    const ENDPOINT: &'static str = "/categories";
    const LABEL: &'static str = "Categories";
    const LABEL_ONE: &'static str = "Category";
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Resource for Ingredient {
    const ENDPOINT: &'static str = "/ingredients";
    const LABEL: &'static str = "Ingredients";
    const LABEL_ONE: &'static str = "Ingredient";
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cook_rg: i64,
    pub cook_name: String,
}

impl Resource for Restaurant {
    const ENDPOINT: &'static str = "/restaurants";
    const LABEL: &'static str = "Restaurants";
    const LABEL_ONE: &'static str = "Restaurant";
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// One (ingredient, quantity, unit) association attached to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub instructions: String,
    pub created_on: NaiveDate,
    pub servings: i32,
    pub cook_rg: i64,
    pub cook_name: String,
    pub category_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Resource for Recipe {
    const ENDPOINT: &'static str = "/recipes";
    const LABEL: &'static str = "Recipes";
    const LABEL_ONE: &'static str = "Recipe";
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Recipe reference carried by a book response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecipe {
    pub id: i64,
    pub name: String,
}

/// Books are keyed by ISBN rather than a numeric id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub editor_rg: i64,
    pub editor_name: String,
    #[serde(default)]
    pub recipes: Vec<BookRecipe>,
}

impl Resource for Book {
    const ENDPOINT: &'static str = "/books";
    const LABEL: &'static str = "Books";
    const LABEL_ONE: &'static str = "Book";
    type Id = String;
    fn id(&self) -> String {
        self.isbn.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TastingTest {
    pub id: i64,
    pub test_date: NaiveDate,
    pub score: f64,
    pub taster_rg: i64,
    pub taster_name: String,
    pub recipe_id: i64,
    pub recipe_name: String,
}

impl Resource for TastingTest {
    const ENDPOINT: &'static str = "/tests";
    const LABEL: &'static str = "Tasting Tests";
    const LABEL_ONE: &'static str = "Tasting test";
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub rg: i64,
    pub name: String,
    pub admission_date: NaiveDate,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookPayload {
    pub rg: i64,
    pub alias: Option<String>,
    pub monthly_recipe_goal: i32,
    pub initial_deadline_days: i32,
    pub contract_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasterPayload {
    pub rg: i64,
    pub contract_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPayload {
    pub rg: i64,
    pub contract_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPayload {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPayload {
    pub name: String,
    pub cook_rg: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub name: String,
    pub instructions: String,
    pub created_on: NaiveDate,
    pub servings: i32,
    pub cook_rg: i64,
    pub category_id: i64,
    /// Absent (not `[]`) when the recipe has no line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<RecipeIngredient>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub isbn: String,
    pub title: String,
    pub editor_rg: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TastingTestPayload {
    pub test_date: NaiveDate,
    pub score: f64,
    pub taster_rg: i64,
    pub recipe_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_items_serialize_camel_case() {
        let item = RecipeIngredient {
            ingredient_id: 3,
            quantity: 0.5,
            unit: "kg".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["ingredientId"], 3);
        assert_eq!(json["quantity"], 0.5);
        assert_eq!(json["unit"], "kg");
    }

    #[test]
    fn empty_line_item_list_is_omitted_from_recipe_payload() {
        let payload = RecipePayload {
            name: "Bread".to_string(),
            instructions: "Knead and bake.".to_string(),
            created_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            servings: 4,
            cook_rg: 10,
            category_id: 2,
            ingredients: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("ingredients").is_none());
        assert_eq!(json["createdOn"], "2024-03-01");
    }

    #[test]
    fn book_deserializes_with_and_without_recipes() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "isbn": "978-1",
            "title": "Family Recipes",
            "editorRg": 3,
            "editorName": "Rui",
            "recipes": [{"id": 4, "name": "Bread"}]
        }))
        .unwrap();
        assert_eq!(book.recipes, vec![BookRecipe { id: 4, name: "Bread".to_string() }]);

        let bare: Book = serde_json::from_value(serde_json::json!({
            "isbn": "978-2",
            "title": "Street Food",
            "editorRg": 3,
            "editorName": "Rui"
        }))
        .unwrap();
        assert!(bare.recipes.is_empty());
    }

    #[test]
    fn recipe_without_ingredients_field_deserializes_empty() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Soup",
            "instructions": "Boil.",
            "createdOn": "2024-01-15",
            "servings": 2,
            "cookRg": 5,
            "cookName": "Ana",
            "categoryId": 1,
            "categoryName": "Starters"
        }))
        .unwrap();
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.id(), 1);
    }
}
