//! Runtime initialization and wiring

use crate::app::{config::AppConfig, logging::init_logging};
use crate::auth::{AuthAction, AuthEffects, AuthSessionManager, HttpIdentityProvider, IdentityProvider};
use crate::navigation::{Navigator, TracingNavigator};
use crate::recipes::{HttpRecipeStore, RecipeEffects, RecipeStore};
use crate::storage::{BlobStore, FileBlobStore};
use crate::store::{Action, AppState, Dispatcher, StateReader, Store, StoreHandle};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// A running store with its effects registered
pub struct App {
    store: StoreHandle,
    sessions: Arc<AuthSessionManager>,
}

impl App {
    /// Wire the store to the given collaborators and start it
    pub fn assemble(
        identity: Arc<dyn IdentityProvider>,
        recipes: Arc<dyn RecipeStore>,
        blobs: Arc<dyn BlobStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut store = Store::new(AppState::default());
        let sessions = Arc::new(AuthSessionManager::new(blobs, store.dispatcher()));

        store.register_effect(Arc::new(RecipeEffects::new(recipes)));
        store.register_effect(Arc::new(AuthEffects::new(
            identity,
            Arc::clone(&sessions),
            navigator,
        )));

        Self {
            store: store.spawn(),
            sessions,
        }
    }

    /// Restore any stored session
    pub fn start(&self) -> Result<()> {
        self.dispatch(AuthAction::AutoLogin)
            .context("Failed to dispatch auto login")
    }

    pub fn dispatch(&self, action: impl Into<Action>) -> crate::Result<()> {
        self.store.dispatch(action)
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.store.dispatcher()
    }

    pub fn state(&self) -> StateReader {
        self.store.state()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.store.subscribe()
    }

    pub fn sessions(&self) -> &Arc<AuthSessionManager> {
        &self.sessions
    }

    /// Stop the store and cancel the logout timer
    pub fn shutdown(self) {
        self.sessions.clear_logout_timer();
        self.store.shutdown();
    }
}

/// Build the HTTP-backed application described by `config` without
/// touching logging
pub fn build_app(config: &AppConfig, navigator: Arc<dyn Navigator>) -> Result<App> {
    let timeout = config.api.request_timeout;

    let identity = HttpIdentityProvider::new(
        config.api.signup_url()?,
        config.api.login_url()?,
        config.api.api_key.clone(),
        timeout,
    )
    .context("Failed to create identity client")?;
    let recipes = HttpRecipeStore::new(config.api.recipes_url()?, timeout)
        .context("Failed to create recipe store client")?;
    let blobs = FileBlobStore::new(config.storage.data_dir.clone());

    Ok(App::assemble(
        Arc::new(identity),
        Arc::new(recipes),
        Arc::new(blobs),
        navigator,
    ))
}

/// Initialize logging, wire the application and restore the stored session
pub async fn initialize_app(config: AppConfig) -> Result<App> {
    init_logging(&config);

    let app = build_app(&config, Arc::new(TracingNavigator))?;
    app.start()?;

    info!(
        "Recipe book started (data dir {})",
        config.storage.data_dir.display()
    );
    Ok(app)
}
