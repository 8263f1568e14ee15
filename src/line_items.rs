//! Recipe Ingredient Line Items
//!
//! Draft-row state and list edits for the composite ingredient editor. Every
//! list operation produces a new list; the recipe form owns the committed
//! items and submits them with its payload.

use crate::models::{Ingredient, RecipeIngredient};

/// In-progress line item, fields as entered in the draft row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngredientDraft {
    pub ingredient_id: String,
    pub quantity: String,
    pub unit: String,
}

/// Why a draft could not be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    /// One of the three fields is still unset.
    MissingFields,
    /// A numeric field did not parse.
    InvalidNumber,
    /// The ingredient is already on the list.
    AlreadyAdded,
}

/// Validate the draft against the committed list and append it.
///
/// Returns the new list; resetting the draft is up to the caller.
pub fn commit(
    draft: &IngredientDraft,
    items: &[RecipeIngredient],
) -> Result<Vec<RecipeIngredient>, DraftError> {
    if draft.ingredient_id.is_empty() || draft.quantity.is_empty() || draft.unit.is_empty() {
        return Err(DraftError::MissingFields);
    }
    let ingredient_id: i64 = draft
        .ingredient_id
        .parse()
        .map_err(|_| DraftError::InvalidNumber)?;
    let quantity: f64 = draft
        .quantity
        .parse()
        .map_err(|_| DraftError::InvalidNumber)?;
    if items.iter().any(|item| item.ingredient_id == ingredient_id) {
        return Err(DraftError::AlreadyAdded);
    }
    let mut next = items.to_vec();
    next.push(RecipeIngredient {
        ingredient_id,
        quantity,
        unit: draft.unit.clone(),
    });
    Ok(next)
}

/// Remove the line item at `index`, keeping the rest in order.
pub fn remove_at(items: &[RecipeIngredient], index: usize) -> Vec<RecipeIngredient> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Human readable name for a committed line item's ingredient.
pub fn display_name(catalog: &[Ingredient], ingredient_id: i64) -> String {
    catalog
        .iter()
        .find(|ingredient| ingredient.id == ingredient_id)
        .map(|ingredient| ingredient.name.clone())
        .unwrap_or_else(|| format!("Ingredient {}", ingredient_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn draft(id: &str, quantity: &str, unit: &str) -> IngredientDraft {
        IngredientDraft {
            ingredient_id: id.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn valid_draft_appends_converted_item() {
        let committed = commit(&draft("1", "200", "g"), &[]).unwrap();
        assert_eq!(
            committed,
            vec![RecipeIngredient {
                ingredient_id: 1,
                quantity: 200.0,
                unit: "g".to_string(),
            }]
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        assert_eq!(commit(&draft("", "200", "g"), &[]), Err(DraftError::MissingFields));
        assert_eq!(commit(&draft("1", "", "g"), &[]), Err(DraftError::MissingFields));
        assert_eq!(commit(&draft("1", "200", ""), &[]), Err(DraftError::MissingFields));
    }

    #[test]
    fn unparsable_quantity_is_rejected() {
        assert_eq!(
            commit(&draft("1", "lots", "g"), &[]),
            Err(DraftError::InvalidNumber)
        );
    }

    #[test]
    fn duplicate_ingredient_is_rejected_and_list_unchanged() {
        let committed = commit(&draft("1", "200", "g"), &[]).unwrap();
        assert_eq!(
            commit(&draft("1", "50", "g"), &committed),
            Err(DraftError::AlreadyAdded)
        );
        assert_eq!(committed.len(), 1);
    }

    #[test]
    fn remove_at_reindexes_remaining_items() {
        let items = vec![
            RecipeIngredient {
                ingredient_id: 1,
                quantity: 200.0,
                unit: "g".to_string(),
            },
            RecipeIngredient {
                ingredient_id: 2,
                quantity: 3.0,
                unit: "units".to_string(),
            },
        ];
        let remaining = remove_at(&items, 0);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].ingredient_id, 2);
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        let catalog = vec![ingredient(1, "Flour"), ingredient(2, "Sugar")];
        assert_eq!(display_name(&catalog, 1), "Flour");
        assert!(display_name(&catalog, 99).contains("99"));
    }

    // The end-to-end editing scenario: commit, duplicate rejection, lookup.
    #[test]
    fn editor_scenario() {
        let catalog = vec![ingredient(1, "Flour"), ingredient(2, "Sugar")];

        let committed = commit(&draft("1", "200", "g"), &[]).unwrap();
        assert_eq!(committed[0].ingredient_id, 1);
        assert_eq!(committed[0].quantity, 200.0);

        assert_eq!(
            commit(&draft("1", "50", "g"), &committed),
            Err(DraftError::AlreadyAdded)
        );

        assert_eq!(display_name(&catalog, committed[0].ingredient_id), "Flour");
    }
}
