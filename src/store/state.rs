//! Root application state

use super::Action;
use crate::auth::{self, AuthState};
use crate::recipes::{self, RecipesState};
use crate::shopping_list::{self, ShoppingListState};
use std::sync::Arc;

/// Every state slice, each behind its own `Arc` so that a transition only
/// replaces the slice it touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub shopping_list: Arc<ShoppingListState>,
    pub recipes: Arc<RecipesState>,
    pub auth: Arc<AuthState>,
}

impl AppState {
    /// Route `action` to the slice reducer that owns it
    pub fn reduce(&self, action: &Action) -> AppState {
        match action {
            Action::ShoppingList(action) => AppState {
                shopping_list: shopping_list::reduce(&self.shopping_list, action),
                ..self.clone()
            },
            Action::Recipes(action) => AppState {
                recipes: recipes::reduce(&self.recipes, action),
                ..self.clone()
            },
            Action::Auth(action) => AppState {
                auth: auth::reduce(&self.auth, action),
                ..self.clone()
            },
            Action::Noop => self.clone(),
        }
    }

    /// True when every slice is the same allocation as in `other`
    pub fn shares_all_slices(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.shopping_list, &other.shopping_list)
            && Arc::ptr_eq(&self.recipes, &other.recipes)
            && Arc::ptr_eq(&self.auth, &other.auth)
    }
}
