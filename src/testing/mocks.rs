//! Test doubles for external collaborators

use crate::auth::{AuthResponse, Credentials, IdentityError, IdentityProvider};
use crate::error::{Error, Result};
use crate::model::{Recipe, RecipePayload};
use crate::navigation::{Navigator, Route};
use crate::recipes::RecipeStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

/// Identity provider answering from a queue of canned responses
#[derive(Default)]
pub struct MockIdentityProvider {
    responses: Mutex<VecDeque<std::result::Result<AuthResponse, IdentityError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful provider reply for `email`
    pub fn response(email: &str, local_id: &str, expires_in: u64) -> AuthResponse {
        AuthResponse {
            kind: "identitytoolkit#VerifyPasswordResponse".to_string(),
            id_token: format!("token-{}", local_id),
            email: email.to_string(),
            refresh_token: format!("refresh-{}", local_id),
            expires_in,
            local_id: local_id.to_string(),
            registered: Some(true),
        }
    }

    pub async fn push_response(&self, response: std::result::Result<AuthResponse, IdentityError>) {
        self.responses.lock().await.push_back(response);
    }

    /// Calls seen so far, as `signup:<email>` / `login:<email>`
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn answer(
        &self,
        call: &str,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        self.calls
            .lock()
            .await
            .push(format!("{}:{}", call, credentials.email));
        self.responses.lock().await.pop_front().unwrap_or_else(|| {
            Err(IdentityError::Transport(
                "no mock response configured".to_string(),
            ))
        })
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        self.answer("signup", credentials).await
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        self.answer("login", credentials).await
    }
}

/// In-memory recipe store that records every write
#[derive(Default)]
pub struct MockRecipeStore {
    remote: Mutex<Vec<RecipePayload>>,
    failure: Mutex<Option<String>>,
    stored: Mutex<Vec<Vec<Recipe>>>,
    store_notify: Notify,
}

impl MockRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_remote(&self, recipes: Vec<RecipePayload>) {
        *self.remote.lock().await = recipes;
    }

    /// Make the next fetch or store fail with `message`
    pub async fn fail_next(&self, message: &str) {
        *self.failure.lock().await = Some(message.to_string());
    }

    /// Every collection written so far
    pub async fn stored(&self) -> Vec<Vec<Recipe>> {
        self.stored.lock().await.clone()
    }

    /// Wait until at least one write happened and return the latest one
    pub async fn wait_for_store(&self) -> Result<Vec<Recipe>> {
        let wait = async {
            loop {
                if let Some(last) = self.stored.lock().await.last() {
                    return last.clone();
                }
                self.store_notify.notified().await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .map_err(|_| Error::Other("timed out waiting for store".to_string()))
    }

    async fn take_failure(&self) -> Result<()> {
        match self.failure.lock().await.take() {
            Some(message) => Err(Error::Other(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecipeStore for MockRecipeStore {
    async fn fetch_recipes(&self) -> Result<Vec<RecipePayload>> {
        self.take_failure().await?;
        Ok(self.remote.lock().await.clone())
    }

    async fn store_recipes(&self, recipes: &[Recipe]) -> Result<()> {
        self.take_failure().await?;
        self.stored.lock().await.push(recipes.to_vec());
        self.store_notify.notify_one();
        Ok(())
    }
}

/// Navigator that remembers every requested route
#[derive(Default)]
pub struct RecordingNavigator {
    routes: std::sync::Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }
}
