//! Fetch and persist flows for the recipe collection

use super::{RecipeStore, RecipesAction};
use crate::error::Result;
use crate::model::RecipePayload;
use crate::store::{Action, Effect, EffectContext};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Keeps the recipe slice in step with the remote store.
///
/// Each trigger issues its own request; overlapping triggers are not
/// coalesced. Store failures come back as errors and nothing is dispatched
/// for them.
pub struct RecipeEffects {
    store: Arc<dyn RecipeStore>,
}

impl RecipeEffects {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Read the remote collection and turn it into a `SetRecipes`
    pub async fn fetch(&self) -> Result<Action> {
        let recipes: Vec<_> = self
            .store
            .fetch_recipes()
            .await?
            .into_iter()
            .map(RecipePayload::normalize)
            .collect();
        info!("Loaded {} recipes", recipes.len());
        Ok(RecipesAction::SetRecipes(recipes).into())
    }

    /// Overwrite the remote collection with the recipes held in state when
    /// the store was requested
    pub async fn persist(&self, ctx: &EffectContext) -> Result<()> {
        let recipes = &ctx.snapshot.recipes.recipes;
        self.store.store_recipes(recipes).await?;
        info!("Saved {} recipes", recipes.len());
        Ok(())
    }
}

#[async_trait]
impl Effect for RecipeEffects {
    fn name(&self) -> &'static str {
        "recipes"
    }

    fn observes(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Recipes(RecipesAction::FetchRecipes | RecipesAction::StoreRecipes)
        )
    }

    async fn handle(&self, action: Action, ctx: EffectContext) -> Result<Option<Action>> {
        match action {
            Action::Recipes(RecipesAction::FetchRecipes) => self.fetch().await.map(Some),
            Action::Recipes(RecipesAction::StoreRecipes) => {
                self.persist(&ctx).await?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}
