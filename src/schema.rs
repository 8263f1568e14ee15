//! Table Schemas
//!
//! Ordered column descriptors per entity. The action column is a separate
//! concern owned by the list page, not part of the schema.

use chrono::NaiveDate;

use crate::models::{
    Book, Category, Cook, Editor, Employee, Ingredient, Recipe, Restaurant, TastingTest, Taster,
};

/// One table column: wire field key, header label, cell formatter.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> String,
}

/// Entities renderable by the generic table.
pub trait Tabular: Sized {
    fn columns() -> Vec<Column<Self>>;
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

pub fn format_money(value: f64) -> String {
    format!("$ {:.2}", value)
}

impl Tabular for Employee {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "rg", label: "RG", value: |e| e.rg.to_string() },
            Column { key: "name", label: "Name", value: |e| e.name.clone() },
            Column {
                key: "admissionDate",
                label: "Admission",
                value: |e| format_date(e.admission_date),
            },
            Column { key: "salary", label: "Salary", value: |e| format_money(e.salary) },
        ]
    }
}

impl Tabular for Cook {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "rg", label: "RG", value: |c| c.rg.to_string() },
            Column { key: "name", label: "Name", value: |c| c.name.clone() },
            Column {
                key: "alias",
                label: "Alias",
                value: |c| c.alias.clone().unwrap_or_else(|| "-".to_string()),
            },
            Column {
                key: "monthlyRecipeGoal",
                label: "Monthly goal",
                value: |c| c.monthly_recipe_goal.to_string(),
            },
            Column {
                key: "initialDeadlineDays",
                label: "Deadline (days)",
                value: |c| c.initial_deadline_days.to_string(),
            },
            Column {
                key: "contractDate",
                label: "Contract",
                value: |c| format_opt_date(c.contract_date),
            },
        ]
    }
}

impl Tabular for Taster {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "rg", label: "RG", value: |t| t.rg.to_string() },
            Column { key: "name", label: "Name", value: |t| t.name.clone() },
            Column {
                key: "contractDate",
                label: "Contract",
                value: |t| format_opt_date(t.contract_date),
            },
        ]
    }
}

impl Tabular for Editor {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "rg", label: "RG", value: |e| e.rg.to_string() },
            Column { key: "name", label: "Name", value: |e| e.name.clone() },
            Column {
                key: "contractDate",
                label: "Contract",
                value: |e| format_opt_date(e.contract_date),
            },
        ]
    }
}

impl Tabular for Category {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "id", label: "ID", value: |c| c.id.to_string() },
            Column { key: "name", label: "Name", value: |c| c.name.clone() },
        ]
    }
}

impl Tabular for Ingredient {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "id", label: "ID", value: |i| i.id.to_string() },
            Column { key: "name", label: "Name", value: |i| i.name.clone() },
            Column { key: "description", label: "Description", value: |i| i.description.clone() },
        ]
    }
}

impl Tabular for Restaurant {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "id", label: "ID", value: |r| r.id.to_string() },
            Column { key: "name", label: "Name", value: |r| r.name.clone() },
            Column { key: "cookName", label: "Cook", value: |r| r.cook_name.clone() },
        ]
    }
}

impl Tabular for Recipe {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "id", label: "ID", value: |r| r.id.to_string() },
            Column { key: "name", label: "Name", value: |r| r.name.clone() },
            Column { key: "categoryName", label: "Category", value: |r| r.category_name.clone() },
            Column { key: "cookName", label: "Cook", value: |r| r.cook_name.clone() },
            Column { key: "createdOn", label: "Created", value: |r| format_date(r.created_on) },
            Column { key: "servings", label: "Servings", value: |r| r.servings.to_string() },
        ]
    }
}

impl Tabular for Book {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "isbn", label: "ISBN", value: |b| b.isbn.clone() },
            Column { key: "title", label: "Title", value: |b| b.title.clone() },
            Column { key: "editorName", label: "Editor", value: |b| b.editor_name.clone() },
        ]
    }
}

impl Tabular for TastingTest {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column { key: "id", label: "ID", value: |t| t.id.to_string() },
            Column { key: "testDate", label: "Date", value: |t| format_date(t.test_date) },
            Column { key: "recipeName", label: "Recipe", value: |t| t.recipe_name.clone() },
            Column { key: "tasterName", label: "Taster", value: |t| t.taster_name.clone() },
            Column { key: "score", label: "Score", value: |t| format!("{:.1}", t.score) },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_columns_format_date_and_money() {
        let employee = Employee {
            rg: 42,
            name: "Ana".to_string(),
            admission_date: NaiveDate::from_ymd_opt(2023, 7, 9).unwrap(),
            salary: 1234.5,
        };
        let columns = Employee::columns();
        let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["rg", "name", "admissionDate", "salary"]);

        let cells: Vec<_> = columns.iter().map(|c| (c.value)(&employee)).collect();
        assert_eq!(cells, vec!["42", "Ana", "09/07/2023", "$ 1234.50"]);
    }

    #[test]
    fn missing_optional_date_renders_placeholder() {
        assert_eq!(format_opt_date(None), "-");
    }
}
