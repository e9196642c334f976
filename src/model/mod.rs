//! Plain data records shared by the shopping list and recipe slices

pub mod ingredient;
pub mod recipe;

pub use ingredient::{Ingredient, IngredientPatch};
pub use recipe::{Recipe, RecipePayload};
