//! Remote identity provider client

use super::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Successful reply of the signup and password-login endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub kind: String,
    pub id_token: String,
    pub email: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Token lifetime in seconds; the provider sends it as a string
    #[serde(deserialize_with = "deserialize_seconds")]
    pub expires_in: u64,
    pub local_id: String,
    #[serde(default)]
    pub registered: Option<bool>,
}

impl AuthResponse {
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.expires_in)
    }
}

fn deserialize_seconds<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(n) => Ok(n),
        Seconds::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Failure talking to the identity provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdentityError {
    /// The provider answered with an error document
    #[error("identity provider rejected the request ({status}): {body}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    #[error("identity provider unreachable: {0}")]
    Transport(String),

    #[error("malformed identity provider response: {0}")]
    Malformed(String),
}

impl IdentityError {
    /// Machine-readable provider code, e.g. `EMAIL_EXISTS`
    pub fn code(&self) -> Option<&str> {
        match self {
            IdentityError::Rejected { body, .. } => body.get("error")?.get("message")?.as_str(),
            _ => None,
        }
    }
}

/// Provider error codes with a dedicated user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailExists,
    EmailNotFound,
    InvalidPassword,
    Unknown,
}

impl AuthErrorCode {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("EMAIL_EXISTS") => AuthErrorCode::EmailExists,
            Some("EMAIL_NOT_FOUND") => AuthErrorCode::EmailNotFound,
            Some("INVALID_PASSWORD") => AuthErrorCode::InvalidPassword,
            _ => AuthErrorCode::Unknown,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AuthErrorCode::EmailExists => "This email exists already.",
            AuthErrorCode::EmailNotFound => "This email is not registered.",
            AuthErrorCode::InvalidPassword => "Wrong password.",
            AuthErrorCode::Unknown => "An unknown error occured.",
        }
    }
}

/// User-facing message for any identity failure
pub fn error_message(error: &IdentityError) -> &'static str {
    AuthErrorCode::from_code(error.code()).message()
}

/// Exchanges credentials for a session token
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in
    async fn sign_up(&self, credentials: &Credentials)
        -> std::result::Result<AuthResponse, IdentityError>;

    /// Sign in an existing account with its password
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError>;
}

/// Identity provider reached over its REST endpoints
pub struct HttpIdentityProvider {
    client: Client,
    signup_url: Url,
    login_url: Url,
    api_key: String,
}

impl HttpIdentityProvider {
    pub fn new(
        signup_url: Url,
        login_url: Url,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            signup_url,
            login_url,
            api_key: api_key.into(),
        })
    }

    async fn post_credentials(
        &self,
        endpoint: &Url,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        let mut url = endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let request = PasswordRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Identity provider accepted {}", credentials.email);
            response
                .json::<AuthResponse>()
                .await
                .map_err(|e| IdentityError::Malformed(e.to_string()))
        } else {
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            Err(IdentityError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        self.post_credentials(&self.signup_url, credentials).await
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthResponse, IdentityError> {
        self.post_credentials(&self.login_url, credentials).await
    }
}
