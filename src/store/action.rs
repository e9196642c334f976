//! Tagged union of every action the store understands

use crate::auth::AuthAction;
use crate::recipes::RecipesAction;
use crate::shopping_list::ShoppingListAction;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShoppingList(ShoppingListAction),
    Recipes(RecipesAction),
    Auth(AuthAction),
    /// Marker with no effect on state, dispatched when there is nothing to do
    Noop,
}

impl Action {
    /// Stable name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::ShoppingList(action) => action.kind(),
            Action::Recipes(action) => action.kind(),
            Action::Auth(action) => action.kind(),
            Action::Noop => "noop",
        }
    }
}

impl From<ShoppingListAction> for Action {
    fn from(action: ShoppingListAction) -> Self {
        Action::ShoppingList(action)
    }
}

impl From<RecipesAction> for Action {
    fn from(action: RecipesAction) -> Self {
        Action::Recipes(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_delegates_to_slice() {
        assert_eq!(
            Action::from(ShoppingListAction::StopEdit).kind(),
            "stop_edit"
        );
        assert_eq!(Action::from(RecipesAction::FetchRecipes).kind(), "fetch_recipes");
        assert_eq!(Action::from(AuthAction::Logout).kind(), "logout");
        assert_eq!(Action::Noop.kind(), "noop");
    }
}
