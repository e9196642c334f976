//! Recipe collection slice and its remote synchronisation

pub mod actions;
pub mod effects;
pub mod remote;
pub mod state;

pub use actions::RecipesAction;
pub use effects::RecipeEffects;
pub use remote::{HttpRecipeStore, RecipeStore};
pub use state::{reduce, RecipesState};
