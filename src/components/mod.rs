//! UI Components
//!
//! Reusable Leptos components.

mod data_table;
mod delete_confirm_button;
mod form_fields;
mod ingredient_select;
mod sidebar;
mod toaster;

pub use data_table::entity_table;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_fields::{SelectField, TextField};
pub use ingredient_select::IngredientSelect;
pub use sidebar::Sidebar;
pub use toaster::Toaster;
