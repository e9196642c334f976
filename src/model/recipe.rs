//! Recipe records and their wire shape

use super::Ingredient;
use serde::{Deserialize, Serialize};

/// A recipe as held in application state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_path: image_path.into(),
            ingredients,
        }
    }
}

/// A recipe exactly as the remote document store returns it.
///
/// The store drops empty arrays, so `ingredients` may be missing entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl RecipePayload {
    /// Convert into a [`Recipe`], defaulting missing ingredients to empty
    pub fn normalize(self) -> Recipe {
        Recipe {
            name: self.name,
            description: self.description,
            image_path: self.image_path,
            ingredients: self.ingredients.unwrap_or_default(),
        }
    }
}
