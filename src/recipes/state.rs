//! Recipe collection state and reducer

use super::RecipesAction;
use crate::model::Recipe;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipesState {
    pub recipes: Arc<Vec<Recipe>>,
}

impl RecipesState {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(recipes),
        }
    }
}

/// Apply `action` to the recipe slice.
///
/// Fetch and store requests are handled by [`super::RecipeEffects`] and leave
/// the slice as it is, as does any index outside the collection.
pub fn reduce(state: &Arc<RecipesState>, action: &RecipesAction) -> Arc<RecipesState> {
    let recipes = match action {
        RecipesAction::SetRecipes(recipes) => recipes.clone(),
        RecipesAction::AddRecipe(recipe) => {
            let mut recipes = state.recipes.as_ref().clone();
            recipes.push(recipe.clone());
            recipes
        }
        RecipesAction::UpdateRecipe { index, recipe } => {
            if *index >= state.recipes.len() {
                warn!("Ignoring update of recipe {}: only {} recipes", index, state.recipes.len());
                return Arc::clone(state);
            }
            let mut recipes = state.recipes.as_ref().clone();
            recipes[*index] = recipe.clone();
            recipes
        }
        RecipesAction::DeleteRecipe(index) => {
            if *index >= state.recipes.len() {
                warn!("Ignoring delete of recipe {}: only {} recipes", index, state.recipes.len());
                return Arc::clone(state);
            }
            state
                .recipes
                .iter()
                .enumerate()
                .filter(|(position, _)| position != index)
                .map(|(_, recipe)| recipe.clone())
                .collect()
        }
        RecipesAction::FetchRecipes | RecipesAction::StoreRecipes => return Arc::clone(state),
    };

    debug!("Recipes {}: {} recipes", action.kind(), recipes.len());
    Arc::new(RecipesState {
        recipes: Arc::new(recipes),
    })
}
