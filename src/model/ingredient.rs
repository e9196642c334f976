//! Ingredient value type

use serde::{Deserialize, Serialize};

/// A named quantity of something on a recipe or on the shopping list.
///
/// Entries are never mutated in place: updates build a new value with
/// [`Ingredient::merged`] and replace the old one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Return a copy with the fields present in `patch` overlaid
    pub fn merged(&self, patch: &IngredientPatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            amount: patch.amount.unwrap_or(self.amount),
        }
    }
}

/// Partial ingredient fields carried by an update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl IngredientPatch {
    pub fn amount(amount: f64) -> Self {
        Self {
            name: None,
            amount: Some(amount),
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            amount: None,
        }
    }
}

impl From<Ingredient> for IngredientPatch {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: Some(ingredient.name),
            amount: Some(ingredient.amount),
        }
    }
}
