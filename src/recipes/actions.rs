//! Recipe actions

use crate::model::Recipe;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipesAction {
    /// Load the whole collection from the remote store
    FetchRecipes,
    /// Write the current collection to the remote store
    StoreRecipes,
    /// Replace the collection
    SetRecipes(Vec<Recipe>),
    AddRecipe(Recipe),
    UpdateRecipe { index: usize, recipe: Recipe },
    DeleteRecipe(usize),
}

impl RecipesAction {
    pub fn kind(&self) -> &'static str {
        match self {
            RecipesAction::FetchRecipes => "fetch_recipes",
            RecipesAction::StoreRecipes => "store_recipes",
            RecipesAction::SetRecipes(_) => "set_recipes",
            RecipesAction::AddRecipe(_) => "add_recipe",
            RecipesAction::UpdateRecipe { .. } => "update_recipe",
            RecipesAction::DeleteRecipe(_) => "delete_recipe",
        }
    }
}
