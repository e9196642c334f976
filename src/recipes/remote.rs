//! Remote recipe document store

use crate::error::{Error, Result};
use crate::model::{Recipe, RecipePayload};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A JSON document holding the whole recipe collection
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Read the full collection as stored remotely
    async fn fetch_recipes(&self) -> Result<Vec<RecipePayload>>;

    /// Overwrite the remote collection with `recipes`
    async fn store_recipes(&self, recipes: &[Recipe]) -> Result<()>;
}

/// Recipe store reached over plain HTTP `GET` / `PUT` of one JSON document
pub struct HttpRecipeStore {
    client: Client,
    url: Url,
}

impl HttpRecipeStore {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl RecipeStore for HttpRecipeStore {
    async fn fetch_recipes(&self) -> Result<Vec<RecipePayload>> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        // An empty document comes back as `null`
        let recipes: Option<Vec<RecipePayload>> = response.json().await?;
        let recipes = recipes.unwrap_or_default();
        debug!("Fetched {} recipes from {}", recipes.len(), self.url);
        Ok(recipes)
    }

    async fn store_recipes(&self, recipes: &[Recipe]) -> Result<()> {
        let response = self.client.put(self.url.clone()).json(recipes).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Stored {} recipes to {}", recipes.len(), self.url);
        Ok(())
    }
}
