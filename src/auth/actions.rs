//! Authentication actions

use super::Session;
use chrono::{DateTime, Utc};
use std::fmt;

/// Email and password pair sent to the identity provider
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload of a successful login, signup or restore
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSuccess {
    pub email: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Navigate home once applied; false for a restored session
    pub redirect: bool,
}

impl AuthSuccess {
    pub fn from_session(session: Session, redirect: bool) -> Self {
        Self {
            email: session.email,
            user_id: session.user_id,
            token: session.token,
            expires_at: session.expires_at,
            redirect,
        }
    }

    pub fn session(&self) -> Session {
        Session::new(
            self.email.clone(),
            self.user_id.clone(),
            self.token.clone(),
            self.expires_at,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    SignupStart(Credentials),
    LoginStart(Credentials),
    AuthSuccess(AuthSuccess),
    /// Human-readable failure message
    AuthFail(String),
    /// Restore a persisted session at startup
    AutoLogin,
    Logout,
    ClearError,
}

impl AuthAction {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthAction::SignupStart(_) => "signup_start",
            AuthAction::LoginStart(_) => "login_start",
            AuthAction::AuthSuccess(_) => "auth_success",
            AuthAction::AuthFail(_) => "auth_fail",
            AuthAction::AutoLogin => "auto_login",
            AuthAction::Logout => "logout",
            AuthAction::ClearError => "clear_error",
        }
    }
}
