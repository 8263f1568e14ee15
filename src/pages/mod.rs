//! Screens
//!
//! One generic list page shared by every entity plus per-entity forms.

mod book_form;
mod category_form;
mod cook_form;
mod editor_form;
mod employee_form;
mod ingredient_form;
mod list;
mod recipe_form;
mod restaurant_form;
mod taster_form;
mod test_form;

pub use book_form::BookForm;
pub use category_form::CategoryForm;
pub use cook_form::CookForm;
pub use editor_form::EditorForm;
pub use employee_form::EmployeeForm;
pub use ingredient_form::IngredientForm;
pub use list::list_page;
pub use recipe_form::RecipeForm;
pub use restaurant_form::RestaurantForm;
pub use taster_form::TasterForm;
pub use test_form::TestForm;
