//! Shopping list actions

use crate::model::{Ingredient, IngredientPatch};

#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListAction {
    /// Append one ingredient
    AddIngredient(Ingredient),
    /// Append every ingredient of the sequence, in order
    AddIngredients(Vec<Ingredient>),
    /// Merge the patch onto the ingredient under edit and end the edit
    UpdateIngredient(IngredientPatch),
    /// Remove the ingredient under edit and end the edit
    DeleteIngredient,
    /// Begin editing the ingredient at the given position
    StartEdit(usize),
    /// End the edit without touching the list
    StopEdit,
}

impl ShoppingListAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ShoppingListAction::AddIngredient(_) => "add_ingredient",
            ShoppingListAction::AddIngredients(_) => "add_ingredients",
            ShoppingListAction::UpdateIngredient(_) => "update_ingredient",
            ShoppingListAction::DeleteIngredient => "delete_ingredient",
            ShoppingListAction::StartEdit(_) => "start_edit",
            ShoppingListAction::StopEdit => "stop_edit",
        }
    }
}
