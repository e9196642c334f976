//! Common test utilities: a local stand-in for the identity provider and
//! the recipe document store

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const API_KEY: &str = "test-key";
pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const WRONG_PASSWORD: &str = "wrong";

/// Shared state of the stub server
#[derive(Default)]
pub struct StubState {
    /// Current recipe document; `None` serves `null`
    pub recipes: Mutex<Option<Value>>,
    /// Number of PUTs received
    pub puts: Mutex<usize>,
    /// Lifetime handed out with tokens, in seconds
    pub expires_in: Mutex<String>,
}

/// A running stub server
pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
    task: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        *state.expires_in.lock().await = "3600".to_string();

        let app = Router::new()
            .route("/signup", post(signup))
            .route("/login", post(login))
            .route("/recipes.json", get(get_recipes).put(put_recipes))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn set_recipes(&self, document: Value) {
        *self.state.recipes.lock().await = Some(document);
    }

    pub async fn recipes(&self) -> Option<Value> {
        self.state.recipes.lock().await.clone()
    }

    pub async fn put_count(&self) -> usize {
        *self.state.puts.lock().await
    }

    pub async fn set_expires_in(&self, seconds: &str) {
        *self.state.expires_in.lock().await = seconds.to_string();
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest {
    email: String,
    password: String,
    return_secure_token: bool,
}

type Reply = (StatusCode, Json<Value>);

fn provider_error(code: &str) -> Reply {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": { "code": 400, "message": code, "errors": [] } })),
    )
}

async fn token_for(state: &StubState, email: &str) -> Reply {
    let expires_in = state.expires_in.lock().await.clone();
    (
        StatusCode::OK,
        Json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "idToken": format!("token-for-{}", email),
            "email": email,
            "refreshToken": "refresh",
            "expiresIn": expires_in,
            "localId": format!("uid-{}", email.len()),
        })),
    )
}

fn check_request(query: &HashMap<String, String>, request: &PasswordRequest) -> Option<Reply> {
    if query.get("key").map(String::as_str) != Some(API_KEY) {
        return Some(provider_error("API_KEY_INVALID"));
    }
    if !request.return_secure_token {
        return Some(provider_error("MISSING_RETURN_SECURE_TOKEN"));
    }
    None
}

async fn signup(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    Json(request): Json<PasswordRequest>,
) -> Reply {
    if let Some(rejection) = check_request(&query, &request) {
        return rejection;
    }
    if request.email == TAKEN_EMAIL {
        return provider_error("EMAIL_EXISTS");
    }
    token_for(&state, &request.email).await
}

async fn login(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    Json(request): Json<PasswordRequest>,
) -> Reply {
    if let Some(rejection) = check_request(&query, &request) {
        return rejection;
    }
    if request.email != TAKEN_EMAIL {
        return provider_error("EMAIL_NOT_FOUND");
    }
    if request.password == WRONG_PASSWORD {
        return provider_error("INVALID_PASSWORD");
    }
    token_for(&state, &request.email).await
}

async fn get_recipes(State(state): State<Arc<StubState>>) -> Json<Value> {
    Json(state.recipes.lock().await.clone().unwrap_or(Value::Null))
}

async fn put_recipes(State(state): State<Arc<StubState>>, Json(document): Json<Value>) -> Json<Value> {
    *state.puts.lock().await += 1;
    *state.recipes.lock().await = Some(document.clone());
    Json(document)
}
